//! petgraph interop.
//!
//! `DiGraphMap` keys nodes by value and keeps neighbors in insertion order,
//! which is exactly what [`GraphTraversal`] needs, so every query in
//! [`crate::traversal`] also runs on petgraph graphs. The conversions below
//! go the other way: they turn the crate's own graphs into petgraph maps,
//! which is handy for feeding results to petgraph's algorithm library.

use petgraph::graphmap::{DiGraphMap, NodeTrait};

use crate::common::GraphTraversal;
use crate::map_graph::AdjacencyMap;
use crate::routes::{AirportId, RouteNetwork};
use crate::vertex::{VertexGraph, VertexId};

impl<N: NodeTrait, E> GraphTraversal for DiGraphMap<N, E> {
    type Node = N;

    fn neighbors(&self, node: N) -> Vec<N> {
        DiGraphMap::neighbors(self, node).collect()
    }

    fn contains_node(&self, node: N) -> bool {
        DiGraphMap::contains_node(self, node)
    }
}

/// Builds a `DiGraphMap` over vertex ids.
///
/// petgraph maps hold at most one edge per ordered pair, so parallel edges
/// collapse into one. Reachability is unaffected.
pub fn vertex_graph_to_digraph<T>(graph: &VertexGraph<T>) -> DiGraphMap<VertexId, ()> {
    let mut g = DiGraphMap::with_capacity(graph.len(), graph.edge_count());
    for id in graph.ids() {
        g.add_node(id);
    }
    for id in graph.ids() {
        for to in GraphTraversal::neighbors(graph, id) {
            g.add_edge(id, to, ());
        }
    }
    g
}

/// Builds a `DiGraphMap` over airport ids.
pub fn route_network_to_digraph(network: &RouteNetwork) -> DiGraphMap<AirportId, ()> {
    let mut g = DiGraphMap::with_capacity(network.len(), network.flight_count());
    for id in network.ids() {
        g.add_node(id);
    }
    for id in network.ids() {
        for &to in network.outbound_flights(id) {
            g.add_edge(id, to, ());
        }
    }
    g
}

/// Builds a `DiGraphMap` over the map's keys.
///
/// Undeclared neighbor keys are left out together with their edges, so the
/// petgraph view agrees with the walk, which never marks them.
pub fn map_graph_to_digraph<M>(map: &M) -> DiGraphMap<&M::Key, ()>
where
    M: AdjacencyMap + ?Sized,
    M::Key: Ord,
{
    let mut g = DiGraphMap::with_capacity(map.key_count(), 0);
    for key in map.keys() {
        g.add_node(key);
    }
    for key in map.keys() {
        for to in map.neighbor_keys(key).unwrap_or(&[]) {
            if map.contains_key(to) {
                g.add_edge(key, to, ());
            }
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::visit::Dfs;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn test_queries_run_on_digraphmap() {
        let mut g: DiGraphMap<u32, ()> = DiGraphMap::new();
        g.add_edge(1, 2, ());
        g.add_edge(2, 3, ());
        g.add_node(4);

        let reached = GraphTraversal::reachable_from(&g, Some(1));
        assert_eq!(reached, HashSet::from([1, 2, 3]));
        assert!(crate::traversal::can_reach(&g, Some(1), Some(3)));
        assert!(!crate::traversal::can_reach(&g, Some(3), Some(1)));
        assert!(!crate::traversal::can_reach(&g, Some(99), Some(99)));
    }

    #[test]
    fn test_vertex_graph_conversion_matches_petgraph_dfs() {
        let mut vg = VertexGraph::new();
        let a = vg.add_vertex("a");
        let b = vg.add_vertex("b");
        let c = vg.add_vertex("c");
        let d = vg.add_vertex("d");
        vg.add_edge(a, b).unwrap();
        vg.add_edge(a, b).unwrap();
        vg.add_edge(b, c).unwrap();
        vg.add_edge(c, a).unwrap();
        vg.add_edge(d, a).unwrap();

        let pg = vertex_graph_to_digraph(&vg);
        assert_eq!(pg.node_count(), 4);
        assert_eq!(pg.edge_count(), 4);

        let mut dfs = Dfs::new(&pg, a);
        let mut expected = HashSet::new();
        while let Some(n) = dfs.next(&pg) {
            expected.insert(n);
        }
        assert_eq!(vg.reachable_from(Some(a)), expected);
    }

    #[test]
    fn test_route_network_conversion() {
        let mut net = RouteNetwork::new();
        net.add_airport("SEA").unwrap();
        net.add_airport("LAX").unwrap();
        net.connect("SEA", "LAX").unwrap();

        let pg = route_network_to_digraph(&net);
        let sea = net.find("SEA").unwrap();
        let lax = net.find("LAX").unwrap();
        assert!(pg.contains_edge(sea, lax));
        assert!(!pg.contains_edge(lax, sea));
    }

    #[test]
    fn test_map_conversion_drops_undeclared() {
        let map: BTreeMap<&str, Vec<&str>> =
            BTreeMap::from([("a", vec!["b", "ghost"]), ("b", vec![])]);
        let pg = map_graph_to_digraph(&map);
        assert_eq!(pg.node_count(), 2);
        assert_eq!(pg.edge_count(), 1);
    }
}
