//! Transport graph.
//!
//! The engine only needs three things from a map: node membership,
//! adjacency from a node, and the transport modes on an edge. Those are the
//! `TransportGraph` trait. `Graph` is the in-memory implementation hosts can
//! build by hand or load from serde map data.

mod transport;

pub use transport::{EdgeData, Graph, GraphData};

use crate::core::{Location, Transport};

/// Read-only view of a transport map.
pub trait TransportGraph {
    /// Check if `node` is part of the map.
    fn contains(&self, node: Location) -> bool;

    /// Number of nodes in the map.
    fn node_count(&self) -> usize;

    /// Nodes reachable from `node` over a single edge.
    ///
    /// Empty for nodes not in the map.
    fn adjacent(&self, node: Location) -> impl Iterator<Item = Location> + '_;

    /// Transport modes on the edge `from -> to`. Empty for non-edges.
    fn transports(&self, from: Location, to: Location) -> &[Transport];

    /// Check if the map has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
