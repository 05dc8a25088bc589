//! Depth-first reachability and aggregation queries.
//!
//! Every query has two layers:
//!
//! - a zero-state entry point (`short_words`, `can_reach`, ...) that allocates
//!   its own visited set, so repeated calls on the same graph are independent;
//! - an `*_in` step that threads a caller-owned visited set, for callers that
//!   want several queries to share one notion of "already processed".
//!
//! All queries accept an absent start (`None`) and return the identity result
//! for it. None of them can fail.
//!
//! # Module Organization
//!
//! - [`short_words`]: emit reachable values shorter than a bound
//! - [`longest`]: longest reachable value
//! - [`self_loops`]: reachable nodes with a direct self-edge
//! - [`reach`]: point-to-point reachability
//! - [`unreachable`]: declared keys of a map graph not reachable from a start

pub mod longest;
pub mod reach;
pub mod self_loops;
pub mod short_words;
pub mod unreachable;

pub use longest::{longest_word, longest_word_in};
pub use reach::{can_reach, can_reach_in};
pub use self_loops::{collect_self_loopers, print_self_loopers, self_loopers, self_loopers_in};
pub use short_words::{collect_short_words, print_short_words, short_words, short_words_in};
pub use unreachable::{unreachable, unreachable_in};

/// Length of a value as the queries measure it: Unicode scalar values.
pub(crate) fn word_len(word: &str) -> usize {
    word.chars().count()
}
