//! Declared keys of a map graph that a start key cannot reach.

use std::collections::HashSet;

use tracing::debug;

use crate::common::DepthFirst;
use crate::map_graph::{AdjacencyMap, MapGraph};

/// Returns the declared keys that are NOT reachable from `start`.
///
/// - absent graph or absent start: empty set;
/// - `start` not declared in the map: every declared key, since an
///   undeclared node has no edges and is not even considered to reach itself;
/// - otherwise: declared keys minus everything the walk marked. The start
///   counts as reached.
pub fn unreachable<'g, M>(graph: Option<&'g M>, start: Option<&M::Key>) -> HashSet<&'g M::Key>
where
    M: AdjacencyMap + ?Sized,
    M::Key: 'g,
{
    let mut visited = HashSet::new();
    unreachable_in(graph, start, &mut visited)
}

/// [`unreachable`] with a caller-owned visited set.
///
/// A start already in `visited` yields an empty set. Undeclared keys met as
/// neighbors are stepped onto but never marked, so they leave `visited`
/// untouched.
pub fn unreachable_in<'g, M>(
    graph: Option<&'g M>,
    start: Option<&M::Key>,
    visited: &mut HashSet<&'g M::Key>,
) -> HashSet<&'g M::Key>
where
    M: AdjacencyMap + ?Sized,
    M::Key: 'g,
{
    let (Some(map), Some(start)) = (graph, start) else {
        return HashSet::new();
    };
    if visited.contains(start) {
        return HashSet::new();
    }
    let Some(start) = map.declared_key(start) else {
        debug!(keys = map.key_count(), "start key undeclared, every key unreachable");
        return map.keys().collect();
    };

    let view = MapGraph::new(map);
    let mut walk = DepthFirst::resume(&view, Some(start), std::mem::take(visited));
    walk.by_ref().for_each(drop);
    *visited = walk.into_visited();

    let unseen: HashSet<&'g M::Key> = map.keys().filter(|k| !visited.contains(*k)).collect();
    debug!(
        keys = map.key_count(),
        visited = visited.len(),
        unreachable = unseen.len(),
        "unreachable scan complete"
    );
    unseen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn graph(edges: &[(&'static str, &[&'static str])]) -> HashMap<&'static str, Vec<&'static str>> {
        edges.iter().map(|(k, ns)| (*k, ns.to_vec())).collect()
    }

    fn sorted<'a>(set: HashSet<&'a &'static str>) -> Vec<&'static str> {
        let mut v: Vec<_> = set.into_iter().copied().collect();
        v.sort();
        v
    }

    #[test]
    fn test_chain_all_reached() {
        let g = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &[])]);
        assert!(unreachable(Some(&g), Some(&"A")).is_empty());
    }

    #[test]
    fn test_undeclared_start_reports_every_key() {
        let g = graph(&[("A", &["B"]), ("B", &["C"]), ("C", &[])]);
        assert_eq!(sorted(unreachable(Some(&g), Some(&"Z"))), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_self_loop_key() {
        let g = graph(&[("A", &["A"])]);
        assert!(unreachable(Some(&g), Some(&"A")).is_empty());
    }

    #[test]
    fn test_partial_reachability() {
        let g = graph(&[
            ("A", &["B"]),
            ("B", &[]),
            ("C", &["A"]),
            ("D", &["D"]),
        ]);
        assert_eq!(sorted(unreachable(Some(&g), Some(&"A"))), vec!["C", "D"]);
        assert_eq!(sorted(unreachable(Some(&g), Some(&"C"))), vec!["D"]);
        assert_eq!(sorted(unreachable(Some(&g), Some(&"B"))), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_undeclared_neighbor_is_terminal() {
        // "ghost" is only a neighbor; walking past it must not stop the scan
        let g = graph(&[("A", &["ghost", "B"]), ("B", &[]), ("C", &[])]);
        assert_eq!(sorted(unreachable(Some(&g), Some(&"A"))), vec!["C"]);
    }

    #[test]
    fn test_absent_inputs_are_empty() {
        let g = graph(&[("A", &[])]);
        assert!(unreachable(Some(&g), None).is_empty());
        assert!(unreachable::<HashMap<&str, Vec<&str>>>(None, Some(&"A")).is_empty());
    }

    #[test]
    fn test_visited_start_is_empty() {
        let g = graph(&[("A", &[]), ("B", &[])]);
        let a = g.declared_key(&"A").unwrap();
        let mut visited = HashSet::from([a]);
        assert!(unreachable_in(Some(&g), Some(&"A"), &mut visited).is_empty());
    }

    #[test]
    fn test_cycle_marks_each_key_once() {
        let g = graph(&[("A", &["B"]), ("B", &["A"]), ("C", &[])]);
        let mut visited = HashSet::new();
        let unseen = unreachable_in(Some(&g), Some(&"A"), &mut visited);
        assert_eq!(sorted(unseen), vec!["C"]);
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_btreemap_with_owned_keys() {
        let g: BTreeMap<String, Vec<String>> = BTreeMap::from([
            ("root".to_string(), vec!["leaf".to_string()]),
            ("leaf".to_string(), vec![]),
            ("orphan".to_string(), vec!["root".to_string()]),
        ]);
        let unseen = unreachable(Some(&g), Some(&"root".to_string()));
        assert_eq!(unseen, HashSet::from([&"orphan".to_string()]));
    }
}
