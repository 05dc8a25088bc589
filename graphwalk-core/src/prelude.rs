//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use graphwalk_core::prelude::*;
//! ```

// Graph shapes and the traversal trait
pub use crate::common::{GraphTraversal, NodeData};
pub use crate::map_graph::AdjacencyMap;
pub use crate::routes::{AirportId, RouteNetwork};
pub use crate::vertex::{VertexGraph, VertexId};

// Queries
pub use crate::traversal::{
    can_reach, collect_self_loopers, collect_short_words, longest_word, print_self_loopers,
    print_short_words, unreachable,
};

// Errors
pub use crate::error::{GraphError, GraphResult};
