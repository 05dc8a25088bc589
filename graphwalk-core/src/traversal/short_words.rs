//! Bounded-length scan: emit every reachable value shorter than `k`.

use std::collections::HashSet;

use tracing::debug;

use super::word_len;
use crate::common::{DepthFirst, DfsEvent, NodeData};

/// Emits, in DFS pre-order, every value reachable from `start` (start
/// included) whose length is strictly less than `k`.
///
/// Each reachable node is inspected once, however many paths lead to it.
pub fn short_words<'g, G, F>(graph: &'g G, start: Option<G::Node>, k: usize, emit: F)
where
    G: NodeData + ?Sized,
    G::Data: AsRef<str>,
    F: FnMut(&'g str),
{
    let mut visited = HashSet::new();
    short_words_in(graph, start, k, &mut visited, emit);
}

/// [`short_words`] with a caller-owned visited set.
pub fn short_words_in<'g, G, F>(
    graph: &'g G,
    start: Option<G::Node>,
    k: usize,
    visited: &mut HashSet<G::Node>,
    mut emit: F,
) where
    G: NodeData + ?Sized,
    G::Data: AsRef<str>,
    F: FnMut(&'g str),
{
    let mut walk = DepthFirst::resume(graph, start, std::mem::take(visited));
    let mut emitted = 0usize;

    for event in walk.by_ref() {
        let DfsEvent::Discover(node) = event else {
            continue;
        };
        if let Some(word) = graph.data(node) {
            let word = word.as_ref();
            if word_len(word) < k {
                emit(word);
                emitted += 1;
            }
        }
    }

    *visited = walk.into_visited();
    debug!(bound = k, visited = visited.len(), emitted, "short-word scan complete");
}

/// Collects the short words in emission order.
pub fn collect_short_words<'g, G>(graph: &'g G, start: Option<G::Node>, k: usize) -> Vec<&'g str>
where
    G: NodeData + ?Sized,
    G::Data: AsRef<str>,
{
    let mut out = Vec::new();
    short_words(graph, start, k, |w| out.push(w));
    out
}

/// Prints each short word on its own line to stdout.
pub fn print_short_words<G>(graph: &G, start: Option<G::Node>, k: usize)
where
    G: NodeData + ?Sized,
    G::Data: AsRef<str>,
{
    short_words(graph, start, k, |w| println!("{}", w));
}
