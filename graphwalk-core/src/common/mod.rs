//! Traversal machinery shared by every graph shape.
//!
//! Graph types implement [`GraphTraversal`] (and [`NodeData`] when their
//! nodes carry a payload); queries consume the [`DepthFirst`] event stream.

mod graph_trait;

pub use graph_trait::{DepthFirst, DfsEvent, GraphTraversal, NodeData};
