//! Graph loading from JSON documents.
//!
//! Three document shapes, one per graph kind:
//!
//! ```json
//! { "vertices": [ { "data": "cat", "neighbors": [1] }, { "data": "dog" } ] }
//! { "airports": [ { "code": "SEA", "outbound": ["LAX"] }, { "code": "LAX" } ] }
//! { "A": ["B"], "B": ["C"], "C": [] }
//! ```
//!
//! Vertex neighbors are indices into `vertices`; airport destinations are
//! codes. Both are validated while the graph is built. Map documents are
//! taken as-is: a neighbor key that is not itself declared is legal and
//! simply terminal.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::error::{GraphError, GraphResult, IoResultExt};
use crate::routes::RouteNetwork;
use crate::vertex::VertexGraph;

/// A map graph as read from disk. `BTreeMap` keeps key order stable.
pub type KeyedGraph = BTreeMap<String, Vec<String>>;

const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VertexDocument {
    vertices: Vec<VertexEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VertexEntry {
    data: String,
    #[serde(default)]
    neighbors: Vec<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteDocument {
    airports: Vec<AirportEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AirportEntry {
    code: String,
    #[serde(default)]
    outbound: Vec<String>,
}

fn read_source(path: &Path) -> GraphResult<String> {
    fs::read_to_string(path).with_path(path)
}

fn decode<T: for<'de> Deserialize<'de>>(text: &str, origin: &Path) -> GraphResult<T> {
    serde_json::from_str(text).map_err(|e| GraphError::parse(origin, e.to_string()))
}

/// Reads a vertex graph document from `path`.
pub fn load_vertex_graph(path: &Path) -> GraphResult<VertexGraph<String>> {
    let text = read_source(path)?;
    parse_vertex_graph(&text, path)
}

/// Parses a vertex graph document held in memory.
pub fn vertex_graph_from_str(text: &str) -> GraphResult<VertexGraph<String>> {
    parse_vertex_graph(text, Path::new(INLINE_SOURCE))
}

fn parse_vertex_graph(text: &str, origin: &Path) -> GraphResult<VertexGraph<String>> {
    let doc: VertexDocument = decode(text, origin)?;

    let mut graph = VertexGraph::with_capacity(doc.vertices.len());
    let mut edges = Vec::new();
    for entry in doc.vertices {
        let id = graph.add_vertex(entry.data);
        edges.push((id, entry.neighbors));
    }
    for (from, targets) in edges {
        for index in targets {
            let to = graph
                .id_at(index)
                .ok_or_else(|| GraphError::unknown_node(format!("vertex index {}", index)))?;
            graph.add_edge(from, to)?;
        }
    }

    info!(
        source = %origin.display(),
        vertices = graph.len(),
        edges = graph.edge_count(),
        "vertex graph loaded"
    );
    Ok(graph)
}

/// Reads a route network document from `path`.
pub fn load_route_network(path: &Path) -> GraphResult<RouteNetwork> {
    let text = read_source(path)?;
    parse_route_network(&text, path)
}

/// Parses a route network document held in memory.
pub fn route_network_from_str(text: &str) -> GraphResult<RouteNetwork> {
    parse_route_network(text, Path::new(INLINE_SOURCE))
}

fn parse_route_network(text: &str, origin: &Path) -> GraphResult<RouteNetwork> {
    let doc: RouteDocument = decode(text, origin)?;

    // Register every airport first so flights may point forward.
    let mut network = RouteNetwork::new();
    for entry in &doc.airports {
        network.add_airport(entry.code.clone())?;
    }
    for entry in &doc.airports {
        for dest in &entry.outbound {
            network.connect(&entry.code, dest)?;
        }
    }

    info!(
        source = %origin.display(),
        airports = network.len(),
        flights = network.flight_count(),
        "route network loaded"
    );
    Ok(network)
}

/// Reads a map graph document from `path`.
pub fn load_map_graph(path: &Path) -> GraphResult<KeyedGraph> {
    let text = read_source(path)?;
    parse_map_graph(&text, path)
}

/// Parses a map graph document held in memory.
pub fn map_graph_from_str(text: &str) -> GraphResult<KeyedGraph> {
    parse_map_graph(text, Path::new(INLINE_SOURCE))
}

fn parse_map_graph(text: &str, origin: &Path) -> GraphResult<KeyedGraph> {
    let graph: KeyedGraph = decode(text, origin)?;
    info!(source = %origin.display(), keys = graph.len(), "map graph loaded");
    Ok(graph)
}

/// Resolves a user-supplied path, rejecting empty input early.
pub fn graph_path(raw: &str) -> GraphResult<PathBuf> {
    if raw.trim().is_empty() {
        return Err(GraphError::invalid_argument("graph path is empty"));
    }
    Ok(PathBuf::from(raw))
}
