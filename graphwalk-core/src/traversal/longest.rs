//! Longest reachable value.

use std::collections::HashSet;

use tracing::debug;

use super::word_len;
use crate::common::{DepthFirst, DfsEvent, NodeData};

/// Returns the longest value reachable from `start`, start included.
///
/// Ties go to the value met first in DFS pre-order. An absent start gives
/// the empty string.
pub fn longest_word<'g, G>(graph: &'g G, start: Option<G::Node>) -> &'g str
where
    G: NodeData + ?Sized,
    G::Data: AsRef<str>,
{
    let mut visited = HashSet::new();
    longest_word_in(graph, start, &mut visited, "")
}

/// [`longest_word`] with a caller-owned visited set and a running best.
///
/// Returns `""` when `start` is absent or already visited; otherwise the
/// longest of `best` and every newly reached value.
pub fn longest_word_in<'g, G>(
    graph: &'g G,
    start: Option<G::Node>,
    visited: &mut HashSet<G::Node>,
    best: &'g str,
) -> &'g str
where
    G: NodeData + ?Sized,
    G::Data: AsRef<str>,
{
    match start {
        None => return "",
        Some(node) if visited.contains(&node) => return "",
        Some(_) => {}
    }

    let mut best = best;
    let mut best_len = word_len(best);
    let mut walk = DepthFirst::resume(graph, start, std::mem::take(visited));

    for event in walk.by_ref() {
        let DfsEvent::Discover(node) = event else {
            continue;
        };
        if let Some(word) = graph.data(node) {
            let word = word.as_ref();
            let len = word_len(word);
            // strict: an equal-length later value never replaces the current best
            if len > best_len {
                best = word;
                best_len = len;
            }
        }
    }

    *visited = walk.into_visited();
    debug!(visited = visited.len(), longest_len = best_len, "longest-word scan complete");
    best
}
