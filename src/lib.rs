//! # rust-pursuit
//!
//! A rules engine for hidden-movement pursuit board games: one concealed
//! fugitive evades several seekers across a transport graph, paying for each
//! move with typed tickets.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `GameState::advance` never mutates its receiver.
//!    Any state can be forked into alternative futures, from any thread.
//!
//! 2. **Pure Rules**: Move generation and win evaluation are plain functions
//!    of their inputs. No I/O, no randomness, no interior mutability.
//!
//! 3. **Concealment at Write Time**: The travel log stores the fugitive's
//!    destination only on reveal rounds, so nothing downstream can leak it.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, which
//!   makes game-tree exploration by callers cheap.
//!
//! - **Cached Results**: Available moves and the winner are computed once per
//!   transition and stored with the state.
//!
//! ## Modules
//!
//! - `core`: Locations, pieces, tickets, moves, travel log, setup, state
//! - `graph`: Transport graph trait and in-memory implementation
//! - `rules`: Move generation and win evaluation
//! - `standard`: The standard 24-round rule set
//!
//! ## Example
//!
//! ```
//! use rust_pursuit::{
//!     Colour, GameSetup, GameState, Graph, Location, Piece, PieceState, Ticket, Tickets,
//!     Transport,
//! };
//!
//! let graph = Graph::new()
//!     .with_edge(Location::new(1), Location::new(2), Transport::Taxi)
//!     .with_edge(Location::new(2), Location::new(3), Transport::Taxi);
//! let setup = GameSetup::new(graph, [true]).unwrap();
//!
//! let fugitive = PieceState::fugitive(Location::new(1), Tickets::new().with(Ticket::Taxi, 1));
//! let seeker = PieceState::new(
//!     Piece::Seeker(Colour::Red),
//!     Location::new(3),
//!     Tickets::new().with(Ticket::Taxi, 1),
//! );
//!
//! let state = GameState::build(setup, fugitive, [seeker]).unwrap();
//! let mv = *state.available_moves().iter().next().unwrap();
//! let state = state.advance(&mv).unwrap();
//!
//! assert_eq!(state.travel_log().len(), 1);
//! ```

pub mod core;
pub mod graph;
pub mod rules;
pub mod standard;

// Re-export commonly used types
pub use crate::core::{
    Colour, ConfigError, DoubleMove, GameSetup, GameState, IllegalMove, Location, LogEntry, Move,
    Piece, PieceState, SingleMove, Ticket, Tickets, Transport, TravelLog,
};

pub use crate::graph::{Graph, TransportGraph};

pub use crate::rules::Side;
