//! Configuration loading from graphwalk.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "graphwalk.toml";

/// Main configuration structure for graphwalk.toml.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GraphwalkConfig {
    /// Output configuration.
    pub output: Option<OutputConfig>,
    /// Query defaults.
    pub query: Option<QueryConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Defaults applied when the command line leaves a query parameter out.
#[derive(Debug, Deserialize, Default)]
pub struct QueryConfig {
    /// Exclusive length bound for the short-words query.
    pub max_word_len: Option<usize>,
}

impl GraphwalkConfig {
    /// True when the file asks for JSON output.
    pub fn wants_json(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .is_some_and(|f| f.eq_ignore_ascii_case("json"))
    }

    pub fn max_word_len(&self) -> Option<usize> {
        self.query.as_ref().and_then(|q| q.max_word_len)
    }
}

/// Loads configuration from graphwalk.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<GraphwalkConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let cfg = toml::from_str(&content).context("Invalid graphwalk.toml")?;
    Ok(Some(cfg))
}
