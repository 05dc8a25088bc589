//! Adjacency-list vertex graph.
//!
//! Vertices live in an arena owned by [`VertexGraph`] and are addressed by
//! [`VertexId`]. Identity is the id, never the payload: two vertices holding
//! the same word are still different nodes.

use std::fmt;

use crate::common::{GraphTraversal, NodeData};
use crate::error::{GraphError, GraphResult};

/// Stable handle to a vertex inside its owning [`VertexGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Position of the vertex in insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// A node: immutable payload plus ordered outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    data: T,
    neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Outgoing edges in the order they were added. May contain the vertex
    /// itself and repeated targets.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// Arena of vertices with directed edges between them.
#[derive(Debug, Clone)]
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VertexGraph<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Adds a vertex with no edges and returns its id.
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex {
            data,
            neighbors: Vec::new(),
        });
        id
    }

    /// Appends a directed edge `from -> to`.
    ///
    /// Self-edges and parallel edges are allowed.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.contains(to) {
            return Err(GraphError::unknown_node(to));
        }
        let vertex = self
            .vertices
            .get_mut(from.0)
            .ok_or_else(|| GraphError::unknown_node(from))?;
        vertex.neighbors.push(to);
        Ok(())
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Looks up a vertex by insertion index.
    pub fn id_at(&self, index: usize) -> Option<VertexId> {
        (index < self.vertices.len()).then_some(VertexId(index))
    }

    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }
}

impl<T> GraphTraversal for VertexGraph<T> {
    type Node = VertexId;

    fn neighbors(&self, node: VertexId) -> Vec<VertexId> {
        self.vertex(node)
            .map(|v| v.neighbors.clone())
            .unwrap_or_default()
    }

    fn contains_node(&self, node: VertexId) -> bool {
        self.contains(node)
    }
}

impl<T> NodeData for VertexGraph<T> {
    type Data = T;

    fn data(&self, node: VertexId) -> Option<&T> {
        self.vertex(node).map(Vertex::data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_and_edges() {
        let mut g = VertexGraph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b).unwrap();
        g.add_edge(a, a).unwrap();
        g.add_edge(a, b).unwrap();

        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.vertex(a).unwrap().neighbors(), &[b, a, b]);
        assert_eq!(g.data(b), Some(&"b"));
    }

    #[test]
    fn test_edge_to_foreign_vertex_rejected() {
        let mut other = VertexGraph::new();
        other.add_vertex(0);
        let stray = other.add_vertex(1);

        let mut g = VertexGraph::new();
        let a = g.add_vertex(0);
        let err = g.add_edge(a, stray).unwrap_err();
        assert!(matches!(err, GraphError::UnknownNode { ref node } if node == "v1"));
        assert!(g.add_edge(stray, a).is_err());
    }

    #[test]
    fn test_equal_payloads_are_distinct_nodes() {
        let mut g = VertexGraph::new();
        let first = g.add_vertex("same");
        let second = g.add_vertex("same");
        assert_ne!(first, second);
        assert_eq!(g.reachable_from(Some(first)).len(), 1);
    }

    #[test]
    fn test_id_at() {
        let mut g = VertexGraph::new();
        let a = g.add_vertex('a');
        assert_eq!(g.id_at(0), Some(a));
        assert_eq!(g.id_at(1), None);
        assert_eq!(g.ids().collect::<Vec<_>>(), vec![a]);
    }
}
