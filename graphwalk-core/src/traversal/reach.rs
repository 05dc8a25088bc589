//! Point-to-point reachability, e.g. "can I fly from SEA to JFK?".

use std::collections::HashSet;

use tracing::debug;

use crate::common::{DepthFirst, GraphTraversal};

/// Whether `destination` can be reached from `start` by following zero or
/// more edges. Reflexive; `false` when either end is absent.
pub fn can_reach<G>(graph: &G, start: Option<G::Node>, destination: Option<G::Node>) -> bool
where
    G: GraphTraversal + ?Sized,
{
    let mut visited = HashSet::new();
    can_reach_in(graph, start, destination, &mut visited)
}

/// [`can_reach`] with a caller-owned visited set.
///
/// The walk always explores the whole subtree under `start`; the answer is
/// destination membership in `visited` once it is done. A start that is
/// already in `visited` answers `false`.
pub fn can_reach_in<G>(
    graph: &G,
    start: Option<G::Node>,
    destination: Option<G::Node>,
    visited: &mut HashSet<G::Node>,
) -> bool
where
    G: GraphTraversal + ?Sized,
{
    let (Some(start), Some(destination)) = (start, destination) else {
        return false;
    };
    if visited.contains(&start) {
        return false;
    }

    let mut walk = DepthFirst::resume(graph, Some(start), std::mem::take(visited));
    walk.by_ref().for_each(drop);
    *visited = walk.into_visited();

    let reached = visited.contains(&destination);
    debug!(visited = visited.len(), reached, "reachability check complete");
    reached
}
