//! graphwalk CLI - run reachability queries against JSON graph documents.
//!
//! Subcommands:
//! - `short-words`, `longest`, `self-loops` on vertex graphs
//! - `can-reach` on route networks
//! - `unreachable` on map graphs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;

use graphwalk_core::{
    can_reach, collect_self_loopers, collect_short_words, graph_path, init_structured_logging,
    load_config, load_map_graph, load_route_network, load_vertex_graph, log_event, log_warn,
    longest_word, report, unreachable, GraphwalkConfig, VertexGraph, VertexId,
};

/// Bound used by `short-words` when neither the flag nor graphwalk.toml set one.
const DEFAULT_MAX_WORD_LEN: usize = 4;

#[derive(Parser, Debug)]
#[command(author, version, about = "Depth-first reachability queries over graph documents")]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print reachable words shorter than a bound, in depth-first order
    ShortWords {
        /// Vertex graph document
        file: String,
        /// Index of the start vertex
        #[arg(long)]
        start: usize,
        /// Exclusive length bound
        #[arg(long)]
        max_len: Option<usize>,
    },

    /// Print the longest reachable word
    Longest {
        /// Vertex graph document
        file: String,
        /// Index of the start vertex
        #[arg(long)]
        start: usize,
    },

    /// Print reachable vertices that have an edge to themselves
    SelfLoops {
        /// Vertex graph document
        file: String,
        /// Index of the start vertex
        #[arg(long)]
        start: usize,
    },

    /// Check whether one airport can reach another (exit code 1 if not)
    CanReach {
        /// Route network document
        file: String,
        /// Departure airport code
        #[arg(long)]
        from: String,
        /// Destination airport code
        #[arg(long)]
        to: String,
    },

    /// Print the declared keys that are not reachable from a start key
    Unreachable {
        /// Map graph document
        file: String,
        /// Start key
        #[arg(long)]
        start: String,
    },
}

/// Resolves a start index to a vertex. Out-of-range indices become an absent
/// start, which every query treats as a no-op.
fn resolve_start(graph: &VertexGraph<String>, index: usize) -> Option<VertexId> {
    let id = graph.id_at(index);
    if id.is_none() {
        log_warn(&format!(
            "start index {} is outside the graph ({} vertices)",
            index,
            graph.len()
        ));
    }
    id
}

/// Picks the short-words bound: flag first, then config, then the default.
fn effective_max_len(flag: Option<usize>, config: Option<&GraphwalkConfig>) -> usize {
    flag.or_else(|| config.and_then(GraphwalkConfig::max_word_len))
        .unwrap_or(DEFAULT_MAX_WORD_LEN)
}

fn load_vertices(file: &str) -> Result<VertexGraph<String>> {
    let path = graph_path(file)?;
    load_vertex_graph(&path).with_context(|| format!("Failed to load vertex graph: {}", file))
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] graphwalk internal error: {}", info);
        eprintln!("[PANIC] The process will exit with code 2.");
    }));

    // JSON to stderr, respects RUST_LOG
    init_structured_logging();

    let cli = Cli::parse();
    let config = load_config(Path::new(".")).context("Failed to read graphwalk.toml")?;
    if config.is_some() {
        log_event("config", "loaded graphwalk.toml");
    }
    let as_json = cli.json || config.as_ref().is_some_and(GraphwalkConfig::wants_json);

    match cli.command {
        Command::ShortWords {
            file,
            start,
            max_len,
        } => {
            let graph = load_vertices(&file)?;
            let k = effective_max_len(max_len, config.as_ref());
            let words = collect_short_words(&graph, resolve_start(&graph, start), k);
            if as_json {
                report::print_json("short_words", &words);
            } else {
                report::print_plain(
                    &format!("WORDS SHORTER THAN {}", k),
                    "No short words reachable.",
                    &words,
                );
            }
        }

        Command::Longest { file, start } => {
            let graph = load_vertices(&file)?;
            let word = longest_word(&graph, resolve_start(&graph, start));
            report::print_value("longest", &serde_json::json!(word), as_json);
        }

        Command::SelfLoops { file, start } => {
            let graph = load_vertices(&file)?;
            let loopers: Vec<&str> = collect_self_loopers(&graph, resolve_start(&graph, start))
                .into_iter()
                .map(String::as_str)
                .collect();
            if as_json {
                report::print_json("self_loops", &loopers);
            } else {
                report::print_plain("SELF LOOPS", "No self-loops reachable.", &loopers);
            }
        }

        Command::CanReach { file, from, to } => {
            let path = graph_path(&file)?;
            let network = load_route_network(&path)
                .with_context(|| format!("Failed to load route network: {}", file))?;
            let reachable = can_reach(&network, network.find(&from), network.find(&to));
            report::print_value("reachable", &serde_json::json!(reachable), as_json);
            std::process::exit(if reachable { 0 } else { 1 });
        }

        Command::Unreachable { file, start } => {
            let path = graph_path(&file)?;
            let graph = load_map_graph(&path)
                .with_context(|| format!("Failed to load map graph: {}", file))?;
            let unseen = unreachable(Some(&graph), Some(&start));
            let keys = report::sorted(unseen.into_iter().map(String::as_str));
            if as_json {
                report::print_json("unreachable", &keys);
            } else {
                report::print_plain(
                    &format!("UNREACHABLE FROM {}", start),
                    "Every key is reachable.",
                    &keys,
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::{vertex_graph_from_str, QueryConfig};

    fn sample() -> VertexGraph<String> {
        vertex_graph_from_str(r#"{"vertices": [{"data": "a", "neighbors": [1]}, {"data": "b"}]}"#)
            .unwrap()
    }

    #[test]
    fn test_resolve_start_in_range() {
        let g = sample();
        assert_eq!(resolve_start(&g, 1), g.id_at(1));
    }

    #[test]
    fn test_resolve_start_out_of_range_is_absent() {
        let g = sample();
        assert_eq!(resolve_start(&g, 7), None);
        assert_eq!(longest_word(&g, resolve_start(&g, 7)), "");
    }

    #[test]
    fn test_effective_max_len_precedence() {
        let cfg = GraphwalkConfig {
            output: None,
            query: Some(QueryConfig {
                max_word_len: Some(6),
            }),
        };
        assert_eq!(effective_max_len(Some(2), Some(&cfg)), 2);
        assert_eq!(effective_max_len(None, Some(&cfg)), 6);
        assert_eq!(effective_max_len(None, None), DEFAULT_MAX_WORD_LEN);
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "graphwalk", "--json", "can-reach", "r.json", "--from", "SEA", "--to", "JFK",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::CanReach { ref from, .. } if from == "SEA"));

        let cli = Cli::try_parse_from([
            "graphwalk", "short-words", "g.json", "--start", "0", "--max-len", "3",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::ShortWords { start: 0, max_len: Some(3), .. }));
    }

    #[test]
    fn test_cli_requires_start() {
        assert!(Cli::try_parse_from(["graphwalk", "longest", "g.json"]).is_err());
    }
}
