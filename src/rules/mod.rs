//! Game rules: move generation and win evaluation.
//!
//! Both halves are pure functions of explicit inputs. `GameState` calls
//! into them once per transition and stores the results.

pub mod generator;
pub mod winner;

pub use generator::{
    double_moves, fugitive_moves, occupied_by_seekers, pending_seeker_moves, seeker_moves,
    single_moves,
};
pub use winner::{evaluate, Position, Side};
