//! In-memory transport graph.
//!
//! Edges are undirected and carry a small set of transport modes. Adjacency
//! is stored as `node -> neighbour -> modes` so both adjacency enumeration
//! and edge lookup are single hash probes.
//!
//! ## Map data
//!
//! `Graph` (de)serializes as a node list plus an edge list:
//!
//! ```
//! use rust_pursuit::core::{Location, Transport};
//! use rust_pursuit::graph::{Graph, TransportGraph};
//!
//! let graph = Graph::new()
//!     .with_edge(Location::new(1), Location::new(2), Transport::Taxi)
//!     .with_edge(Location::new(1), Location::new(2), Transport::Bus);
//!
//! assert!(graph.contains(Location::new(2)));
//! assert_eq!(
//!     graph.transports(Location::new(2), Location::new(1)),
//!     &[Transport::Taxi, Transport::Bus]
//! );
//! ```

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::TransportGraph;
use crate::core::{Location, Transport};

/// Modes carried by one edge. Real maps rarely exceed two per edge.
type EdgeModes = SmallVec<[Transport; 2]>;

/// Undirected transport graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GraphData", into = "GraphData")]
pub struct Graph {
    nodes: BTreeSet<Location>,
    edges: FxHashMap<Location, FxHashMap<Location, EdgeModes>>,
}

impl Graph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no edges. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: Location) {
        self.nodes.insert(node);
    }

    /// Add `transport` to the edge between `a` and `b`, creating the
    /// nodes and the edge as needed.
    pub fn add_edge(&mut self, a: Location, b: Location, transport: Transport) {
        self.add_node(a);
        self.add_node(b);
        self.insert_mode(a, b, transport);
        self.insert_mode(b, a, transport);
    }

    /// Builder form of `add_node`.
    #[must_use]
    pub fn with_node(mut self, node: Location) -> Self {
        self.add_node(node);
        self
    }

    /// Builder form of `add_edge`.
    #[must_use]
    pub fn with_edge(mut self, a: Location, b: Location, transport: Transport) -> Self {
        self.add_edge(a, b, transport);
        self
    }

    /// Iterate over nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = Location> + '_ {
        self.nodes.iter().copied()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
            .iter()
            .flat_map(|(&from, neighbours)| neighbours.keys().map(move |&to| (from, to)))
            .filter(|&(from, to)| from <= to)
            .count()
    }

    fn insert_mode(&mut self, from: Location, to: Location, transport: Transport) {
        let modes = self.edges.entry(from).or_default().entry(to).or_default();
        if !modes.contains(&transport) {
            modes.push(transport);
        }
    }
}

impl TransportGraph for Graph {
    fn contains(&self, node: Location) -> bool {
        self.nodes.contains(&node)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn adjacent(&self, node: Location) -> impl Iterator<Item = Location> + '_ {
        self.edges
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.keys().copied())
    }

    fn transports(&self, from: Location, to: Location) -> &[Transport] {
        self.edges
            .get(&from)
            .and_then(|neighbours| neighbours.get(&to))
            .map(|modes| modes.as_slice())
            .unwrap_or(&[])
    }
}

/// Serialized map data: nodes plus undirected edges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<Location>,
    #[serde(default)]
    pub edges: Vec<EdgeData>,
}

/// One undirected edge in map data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    pub from: Location,
    pub to: Location,
    pub transports: Vec<Transport>,
}

impl From<GraphData> for Graph {
    fn from(data: GraphData) -> Self {
        let mut graph = Graph::new();
        for node in data.nodes {
            graph.add_node(node);
        }
        for edge in data.edges {
            for transport in edge.transports {
                graph.add_edge(edge.from, edge.to, transport);
            }
        }
        graph
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        let mut edges: Vec<EdgeData> = graph
            .edges
            .iter()
            .flat_map(|(&from, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |&(&to, _)| from <= to)
                    .map(move |(&to, modes)| EdgeData {
                        from,
                        to,
                        transports: modes.to_vec(),
                    })
            })
            .collect();
        edges.sort_by_key(|e| (e.from, e.to));

        GraphData {
            nodes: graph.nodes.into_iter().collect(),
            edges,
        }
    }
}
