//! Self-loop scan: reachable nodes that list themselves as a neighbor.
//!
//! Works on any graph with identity-comparable nodes and a payload, so the
//! same code serves vertex graphs, route networks and anything else
//! implementing [`NodeData`].

use std::collections::HashSet;
use std::fmt::Display;

use tracing::debug;

use crate::common::{DepthFirst, DfsEvent, NodeData};

/// Emits the payload of every reachable node with a direct self-edge.
///
/// The check is on node identity, not payload equality, and only direct
/// edges count (a longer cycle back to the node does not). Emission happens
/// while the node's neighbor list is scanned, at the position of the
/// self-edge, so a node listing itself twice is emitted twice.
pub fn self_loopers<'g, G, F>(graph: &'g G, start: Option<G::Node>, emit: F)
where
    G: NodeData + ?Sized,
    F: FnMut(&'g G::Data),
{
    let mut visited = HashSet::new();
    self_loopers_in(graph, start, &mut visited, emit);
}

/// [`self_loopers`] with a caller-owned visited set.
pub fn self_loopers_in<'g, G, F>(
    graph: &'g G,
    start: Option<G::Node>,
    visited: &mut HashSet<G::Node>,
    mut emit: F,
) where
    G: NodeData + ?Sized,
    F: FnMut(&'g G::Data),
{
    let mut walk = DepthFirst::resume(graph, start, std::mem::take(visited));
    let mut loops = 0usize;

    for event in walk.by_ref() {
        if let DfsEvent::Edge { from, to } = event {
            if from == to {
                if let Some(data) = graph.data(from) {
                    emit(data);
                    loops += 1;
                }
            }
        }
    }

    *visited = walk.into_visited();
    debug!(visited = visited.len(), loops, "self-loop scan complete");
}

/// Collects self-looping payloads in emission order.
pub fn collect_self_loopers<'g, G>(graph: &'g G, start: Option<G::Node>) -> Vec<&'g G::Data>
where
    G: NodeData + ?Sized,
{
    let mut out = Vec::new();
    self_loopers(graph, start, |d| out.push(d));
    out
}

/// Prints each self-looping payload on its own line to stdout.
pub fn print_self_loopers<G>(graph: &G, start: Option<G::Node>)
where
    G: NodeData + ?Sized,
    G::Data: Display,
{
    self_loopers(graph, start, |d| println!("{}", d));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::RouteNetwork;
    use crate::vertex::VertexGraph;

    #[test]
    fn test_reports_direct_self_edges_only() {
        let mut g = VertexGraph::new();
        let a = g.add_vertex(1);
        let b = g.add_vertex(2);
        let c = g.add_vertex(3);
        g.add_edge(a, b).unwrap();
        g.add_edge(b, b).unwrap();
        g.add_edge(b, c).unwrap();
        g.add_edge(c, a).unwrap();

        assert_eq!(collect_self_loopers(&g, Some(a)), vec![&2]);
    }

    #[test]
    fn test_no_self_loops_no_output() {
        let mut g = VertexGraph::new();
        let a = g.add_vertex('a');
        let b = g.add_vertex('b');
        g.add_edge(a, b).unwrap();
        g.add_edge(b, a).unwrap();

        assert!(collect_self_loopers(&g, Some(a)).is_empty());
        assert!(collect_self_loopers(&g, None).is_empty());
    }

    #[test]
    fn test_identity_not_value() {
        // two vertices with the same payload pointing at each other
        let mut g = VertexGraph::new();
        let a = g.add_vertex("same");
        let b = g.add_vertex("same");
        g.add_edge(a, b).unwrap();
        g.add_edge(b, a).unwrap();

        assert!(collect_self_loopers(&g, Some(a)).is_empty());
    }

    #[test]
    fn test_emission_follows_neighbor_position() {
        // a -> [b, a], b -> [b]: b's subtree finishes before a's self-edge is scanned
        let mut g = VertexGraph::new();
        let a = g.add_vertex("a");
        let b = g.add_vertex("b");
        g.add_edge(a, b).unwrap();
        g.add_edge(a, a).unwrap();
        g.add_edge(b, b).unwrap();

        assert_eq!(collect_self_loopers(&g, Some(a)), vec![&"b", &"a"]);
    }

    #[test]
    fn test_repeated_self_edge_emitted_per_edge() {
        let mut g = VertexGraph::new();
        let a = g.add_vertex("a");
        g.add_edge(a, a).unwrap();
        g.add_edge(a, a).unwrap();

        assert_eq!(collect_self_loopers(&g, Some(a)), vec![&"a", &"a"]);
    }

    #[test]
    fn test_works_on_route_networks() {
        let mut net = RouteNetwork::new();
        let sea = net.add_airport("SEA").unwrap();
        net.add_airport("PDX").unwrap();
        net.connect("SEA", "PDX").unwrap();
        net.connect("PDX", "PDX").unwrap();

        let codes: Vec<&str> = collect_self_loopers(&net, Some(sea));
        assert_eq!(codes, vec!["PDX"]);
    }
}
