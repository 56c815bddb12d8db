//! Game setup: the map plus the round schedule.
//!
//! A setup pairs a transport graph with one reveal flag per round. Round
//! `i` is the fugitive's `i`-th leg (0-based); on reveal rounds the log
//! records where the fugitive went.
//!
//! The graph is shared through an `Arc`, so cloning a setup (and therefore
//! every game state) never copies map data.

use std::sync::Arc;

use im::Vector;

use super::error::ConfigError;
use crate::graph::{Graph, TransportGraph};

/// Immutable map and round schedule.
#[derive(Debug, PartialEq, Eq)]
pub struct GameSetup<G = Graph> {
    graph: Arc<G>,
    rounds: Vector<bool>,
}

impl<G> Clone for GameSetup<G> {
    fn clone(&self) -> Self {
        Self {
            graph: Arc::clone(&self.graph),
            rounds: self.rounds.clone(),
        }
    }
}

impl<G: TransportGraph> GameSetup<G> {
    /// Create a setup.
    ///
    /// Fails if the graph has no nodes or the schedule has no rounds.
    pub fn new(graph: G, rounds: impl IntoIterator<Item = bool>) -> Result<Self, ConfigError> {
        Self::shared(Arc::new(graph), rounds)
    }

    /// Create a setup over a graph already shared elsewhere.
    pub fn shared(
        graph: Arc<G>,
        rounds: impl IntoIterator<Item = bool>,
    ) -> Result<Self, ConfigError> {
        if graph.is_empty() {
            return Err(ConfigError::EmptyGraph);
        }
        let rounds: Vector<bool> = rounds.into_iter().collect();
        if rounds.is_empty() {
            return Err(ConfigError::EmptyRounds);
        }
        Ok(Self { graph, rounds })
    }
}

impl<G> GameSetup<G> {
    #[must_use]
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Reveal flags, one per round.
    pub fn rounds(&self) -> impl Iterator<Item = bool> + '_ {
        self.rounds.iter().copied()
    }

    /// Total number of rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Check if round `round` (0-based) reveals the fugitive.
    ///
    /// Rounds past the end of the schedule never reveal.
    #[must_use]
    pub fn is_reveal(&self, round: usize) -> bool {
        self.rounds.get(round).copied().unwrap_or(false)
    }
}
