//! graphwalk-core: depth-first reachability queries over in-memory graphs.
//!
//! Three graph shapes are supported out of the box:
//!
//! - **Vertex graphs** ([`VertexGraph`]): an arena of vertices, each holding a
//!   payload and an ordered list of neighbor ids.
//! - **Route networks** ([`RouteNetwork`]): airports with outbound flights.
//! - **Map graphs** (any [`AdjacencyMap`], e.g. `HashMap<K, Vec<K>>`).
//!
//! petgraph's `DiGraphMap` works as well. All of them implement
//! [`GraphTraversal`], and the queries in [`traversal`] are written against
//! that trait.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use graphwalk_core::prelude::*;
//!
//! let mut g = VertexGraph::new();
//! let a = g.add_vertex("ant".to_string());
//! let b = g.add_vertex("beetle".to_string());
//! g.add_edge(a, b)?;
//!
//! assert_eq!(longest_word(&g, Some(a)), "beetle");
//! assert_eq!(collect_short_words(&g, Some(a), 4), vec!["ant"]);
//! ```
//!
//! # Module Organization
//!
//! - [`common`]: the traversal trait and the iterative DFS event stream
//! - [`traversal`]: the queries
//! - [`vertex`], [`routes`], [`map_graph`]: graph shapes
//! - [`graph`]: petgraph interop
//! - [`loader`]: JSON graph documents
//! - [`report`]: plain/JSON output
//! - [`config`], [`logging`], [`error`]: ambient plumbing

pub mod common;
pub mod config;
pub mod error;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod map_graph;
pub mod prelude;
pub mod report;
pub mod routes;
pub mod traversal;
pub mod vertex;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Traversal machinery
pub use common::{DepthFirst, DfsEvent, GraphTraversal, NodeData};

// Error types
pub use error::{GraphError, GraphResult, IoResultExt};

// Configuration
pub use config::{load_config, GraphwalkConfig, OutputConfig, QueryConfig};

// Graph shapes
pub use map_graph::{AdjacencyMap, MapGraph};
pub use routes::{Airport, AirportId, RouteNetwork};
pub use vertex::{Vertex, VertexGraph, VertexId};

// petgraph interop
pub use graph::{map_graph_to_digraph, route_network_to_digraph, vertex_graph_to_digraph};

// Loading
pub use loader::{
    graph_path, load_map_graph, load_route_network, load_vertex_graph, map_graph_from_str,
    route_network_from_str, vertex_graph_from_str, KeyedGraph,
};

// Logging
pub use logging::{init_structured_logging, log_event, log_warn};

// Queries
pub use traversal::{
    can_reach, can_reach_in, collect_self_loopers, collect_short_words, longest_word,
    longest_word_in, print_self_loopers, print_short_words, self_loopers, self_loopers_in,
    short_words, short_words_in, unreachable, unreachable_in,
};
