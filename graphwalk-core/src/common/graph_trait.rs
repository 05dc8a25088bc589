//! Shared depth-first traversal abstraction.
//!
//! Every graph shape in the crate (vertex arena, route network, map graph,
//! petgraph maps) implements [`GraphTraversal`], and every query is written
//! against the [`DepthFirst`] event stream it provides.
//!
//! The walk keeps an explicit stack of frames `(node, neighbors, cursor)`
//! instead of recursing, so deep or long-chained graphs cannot overflow the
//! call stack. Events come out in exactly the order a recursive pre-order DFS
//! would produce them:
//!
//! ```text
//! visit(n):
//!     if n unknown or already visited: return
//!     mark n                          -> Discover(n)
//!     for m in neighbors(n):
//!         scan edge                   -> Edge { from: n, to: m }
//!         visit(m)
//! ```

use std::collections::HashSet;
use std::hash::Hash;

/// Capability required by the traversal engine.
///
/// Node identity is whatever `Node: Eq + Hash` says it is. Arena graphs use
/// ids, so two nodes holding equal payloads stay distinct.
///
/// # Example
/// ```ignore
/// impl GraphTraversal for CallGraph {
///     type Node = FnId;
///
///     fn neighbors(&self, node: FnId) -> Vec<FnId> {
///         self.callees.get(&node).cloned().unwrap_or_default()
///     }
///
///     fn contains_node(&self, node: FnId) -> bool {
///         self.callees.contains_key(&node)
///     }
/// }
///
/// let reachable = graph.reachable_from(Some(entry));
/// ```
pub trait GraphTraversal {
    /// The type used to identify nodes in the graph.
    type Node: Copy + Eq + Hash;

    /// Returns the outgoing neighbors of a node, in listed order.
    fn neighbors(&self, node: Self::Node) -> Vec<Self::Node>;

    /// Whether the walk may enter `node`.
    ///
    /// Nodes for which this is false are treated as terminal: they are never
    /// marked visited and never expanded.
    fn contains_node(&self, node: Self::Node) -> bool;

    /// Starts a fresh depth-first walk. `None` yields an empty walk.
    fn depth_first(&self, start: Option<Self::Node>) -> DepthFirst<'_, Self> {
        DepthFirst::resume(self, start, HashSet::new())
    }

    /// Set of all nodes reachable from `start`, start included.
    fn reachable_from(&self, start: Option<Self::Node>) -> HashSet<Self::Node> {
        let mut walk = self.depth_first(start);
        walk.by_ref().for_each(drop);
        walk.into_visited()
    }
}

/// Graphs whose nodes carry a payload that queries can report.
pub trait NodeData: GraphTraversal {
    type Data: ?Sized;

    /// Payload of `node`, or `None` if the node is not part of the graph.
    fn data(&self, node: Self::Node) -> Option<&Self::Data>;
}

/// One step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent<N> {
    /// First (and only) entry into a node. Emitted before any of its edges.
    Discover(N),
    /// An edge being scanned. Emitted before the walk tries to enter `to`,
    /// and after the subtrees of all earlier edges of `from` are finished.
    Edge { from: N, to: N },
}

struct Frame<N> {
    node: N,
    neighbors: Vec<N>,
    cursor: usize,
}

/// Iterative pre-order DFS yielding [`DfsEvent`]s.
pub struct DepthFirst<'g, G: GraphTraversal + ?Sized> {
    graph: &'g G,
    visited: HashSet<G::Node>,
    stack: Vec<Frame<G::Node>>,
    pending: Option<G::Node>,
}

impl<'g, G: GraphTraversal + ?Sized> DepthFirst<'g, G> {
    /// Continues with a visited set carried over from earlier walks.
    ///
    /// Nodes already in `visited` are skipped, so a start that was visited
    /// before produces an empty walk.
    pub fn resume(graph: &'g G, start: Option<G::Node>, visited: HashSet<G::Node>) -> Self {
        Self {
            graph,
            visited,
            stack: Vec::new(),
            pending: start,
        }
    }

    /// Nodes marked so far.
    pub fn visited(&self) -> &HashSet<G::Node> {
        &self.visited
    }

    /// Length of the current DFS path.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Consumes the walk and hands back its visited set.
    pub fn into_visited(self) -> HashSet<G::Node> {
        self.visited
    }
}

impl<G: GraphTraversal + ?Sized> Iterator for DepthFirst<'_, G> {
    type Item = DfsEvent<G::Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.pending.take() {
                if self.graph.contains_node(node) && self.visited.insert(node) {
                    self.stack.push(Frame {
                        node,
                        neighbors: self.graph.neighbors(node),
                        cursor: 0,
                    });
                    return Some(DfsEvent::Discover(node));
                }
                continue;
            }

            let frame = self.stack.last_mut()?;
            if let Some(&to) = frame.neighbors.get(frame.cursor) {
                frame.cursor += 1;
                self.pending = Some(to);
                return Some(DfsEvent::Edge {
                    from: frame.node,
                    to,
                });
            }
            self.stack.pop();
        }
    }
}
