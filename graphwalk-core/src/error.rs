//! Typed error handling for graphwalk.
//!
//! Traversal queries never fail. Errors only come from building graphs,
//! loading them from disk, and reading configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for graph construction and loading.
#[derive(Error, Debug)]
pub enum GraphError {
    /// I/O error when reading a graph or config file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Graph document could not be decoded
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// An edge or lookup referenced a node the graph does not contain
    #[error("Unknown node: {node}")]
    UnknownNode { node: String },

    /// The same node identity was declared twice
    #[error("Duplicate node: {node}")]
    DuplicateNode { node: String },

    /// Invalid argument provided
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl GraphError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unknown_node(node: impl ToString) -> Self {
        Self::UnknownNode {
            node: node.to_string(),
        }
    }

    pub fn duplicate_node(node: impl ToString) -> Self {
        Self::DuplicateNode {
            node: node.to_string(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error only affects one input and the caller may carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Config { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Parse { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for graphwalk results.
pub type GraphResult<T> = Result<T, GraphError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> GraphResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> GraphResult<T> {
        self.map_err(|e| GraphError::io(path, e))
    }
}
