//! Core engine types: locations, pieces, tickets, moves, log, setup, state.
//!
//! Everything here is an immutable value. `GameState` is the only type with
//! behaviour beyond construction and lookup, and even it only ever produces
//! new values.

pub mod location;
pub mod piece;
pub mod ticket;
pub mod player;
pub mod moves;
pub mod log;
pub mod setup;
pub mod error;
pub mod state;

pub use location::Location;
pub use piece::{Colour, Piece};
pub use ticket::{Ticket, Tickets, Transport};
pub use player::PieceState;
pub use moves::{DoubleMove, Move, MoveTickets, SingleMove};
pub use log::{LogEntry, TravelLog};
pub use setup::GameSetup;
pub use error::{ConfigError, IllegalMove};
pub use state::GameState;
