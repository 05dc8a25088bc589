//! Route network: airports connected by directed outbound flights.
//!
//! Airports are identified by [`AirportId`]. The display `code` is only used
//! to build and print networks; queries never compare codes.

use std::collections::HashMap;
use std::fmt;

use crate::common::{GraphTraversal, NodeData};
use crate::error::{GraphError, GraphResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportId(usize);

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "airport#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Airport {
    code: String,
    outbound: Vec<AirportId>,
}

impl Airport {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Destinations served from this airport, in the order flights were added.
    pub fn outbound_flights(&self) -> &[AirportId] {
        &self.outbound
    }
}

/// Owns every airport and the flights between them.
#[derive(Debug, Clone, Default)]
pub struct RouteNetwork {
    airports: Vec<Airport>,
    by_code: HashMap<String, AirportId>,
}

impl RouteNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an airport. Codes must be unique within a network.
    pub fn add_airport(&mut self, code: impl Into<String>) -> GraphResult<AirportId> {
        let code = code.into();
        if self.by_code.contains_key(&code) {
            return Err(GraphError::duplicate_node(code));
        }
        let id = AirportId(self.airports.len());
        self.by_code.insert(code.clone(), id);
        self.airports.push(Airport {
            code,
            outbound: Vec::new(),
        });
        Ok(id)
    }

    /// Adds a directed flight `from -> to`.
    pub fn add_flight(&mut self, from: AirportId, to: AirportId) -> GraphResult<()> {
        if to.0 >= self.airports.len() {
            return Err(GraphError::unknown_node(to));
        }
        let airport = self
            .airports
            .get_mut(from.0)
            .ok_or_else(|| GraphError::unknown_node(from))?;
        airport.outbound.push(to);
        Ok(())
    }

    /// Adds a flight between two airports given by code.
    pub fn connect(&mut self, from: &str, to: &str) -> GraphResult<()> {
        let from = self.find(from).ok_or_else(|| GraphError::unknown_node(from))?;
        let to = self.find(to).ok_or_else(|| GraphError::unknown_node(to))?;
        self.add_flight(from, to)
    }

    pub fn find(&self, code: &str) -> Option<AirportId> {
        self.by_code.get(code).copied()
    }

    pub fn airport(&self, id: AirportId) -> Option<&Airport> {
        self.airports.get(id.0)
    }

    pub fn outbound_flights(&self, id: AirportId) -> &[AirportId] {
        self.airport(id).map(Airport::outbound_flights).unwrap_or(&[])
    }

    pub fn ids(&self) -> impl Iterator<Item = AirportId> + '_ {
        (0..self.airports.len()).map(AirportId)
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn flight_count(&self) -> usize {
        self.airports.iter().map(|a| a.outbound.len()).sum()
    }
}

impl GraphTraversal for RouteNetwork {
    type Node = AirportId;

    fn neighbors(&self, node: AirportId) -> Vec<AirportId> {
        self.outbound_flights(node).to_vec()
    }

    fn contains_node(&self, node: AirportId) -> bool {
        node.0 < self.airports.len()
    }
}

impl NodeData for RouteNetwork {
    type Data = str;

    fn data(&self, node: AirportId) -> Option<&str> {
        self.airport(node).map(Airport::code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_by_code() {
        let mut net = RouteNetwork::new();
        let sea = net.add_airport("SEA").unwrap();
        let lax = net.add_airport("LAX").unwrap();
        net.connect("SEA", "LAX").unwrap();

        assert_eq!(net.outbound_flights(sea), &[lax]);
        assert!(net.outbound_flights(lax).is_empty());
        assert_eq!(net.data(lax), Some("LAX"));
        assert_eq!(net.flight_count(), 1);
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let mut net = RouteNetwork::new();
        net.add_airport("SEA").unwrap();
        let err = net.add_airport("SEA").unwrap_err();
        assert!(matches!(err, GraphError::DuplicateNode { .. }));
        assert_eq!(net.len(), 1);
    }

    #[test]
    fn test_unknown_code_rejected() {
        let mut net = RouteNetwork::new();
        net.add_airport("SEA").unwrap();
        let err = net.connect("SEA", "JFK").unwrap_err();
        assert_eq!(err.to_string(), "Unknown node: JFK");
    }

    #[test]
    fn test_outbound_of_missing_airport_is_empty() {
        let mut other = RouteNetwork::new();
        other.add_airport("A").unwrap();
        let stray = other.add_airport("B").unwrap();

        let net = RouteNetwork::new();
        assert!(net.outbound_flights(stray).is_empty());
        assert!(!net.contains_node(stray));
    }
}
