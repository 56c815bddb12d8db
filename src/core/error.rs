//! Error types.
//!
//! - `ConfigError`: raised only while building a setup or initial state.
//! - `IllegalMove`: raised only by `GameState::advance`.

use thiserror::Error;

use super::location::Location;
use super::moves::Move;
use super::piece::{Colour, Piece};
use super::ticket::Ticket;

/// Rejected game configuration. No partial state is ever produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the transport graph has no nodes")]
    EmptyGraph,
    #[error("the round schedule is empty")]
    EmptyRounds,
    #[error("there are no seekers")]
    NoSeekers,
    #[error("{piece} was given as the fugitive")]
    NotAFugitive { piece: Piece },
    #[error("the fugitive was given as a seeker")]
    NotASeeker,
    #[error("more than one {colour} seeker")]
    DuplicateSeeker { colour: Colour },
    #[error("seekers overlap at location {location}")]
    OverlappingSeekers { location: Location },
    #[error("{piece} holds {ticket} tickets, which seekers may not hold")]
    SeekerHoldsSpecialTicket { piece: Piece, ticket: Ticket },
    #[error("{piece} starts at {location}, which is not on the map")]
    LocationNotInGraph { piece: Piece, location: Location },
}

/// A move `advance` refused. The receiving state is unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("illegal move {0}: the game is already over")]
    GameOver(Move),
    #[error("illegal move {0}: not among the available moves")]
    NotAvailable(Move),
}

impl IllegalMove {
    /// The rejected move.
    #[must_use]
    pub const fn rejected(&self) -> &Move {
        match self {
            IllegalMove::GameOver(mv) | IllegalMove::NotAvailable(mv) => mv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moves::SingleMove;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::OverlappingSeekers {
            location: Location::new(4),
        };
        assert_eq!(err.to_string(), "seekers overlap at location 4");

        let err = ConfigError::SeekerHoldsSpecialTicket {
            piece: Piece::Seeker(Colour::Red),
            ticket: Ticket::Secret,
        };
        assert_eq!(
            err.to_string(),
            "Red seeker holds SECRET tickets, which seekers may not hold"
        );
    }

    #[test]
    fn test_illegal_move_carries_move() {
        let mv = Move::from(SingleMove::new(
            Piece::Fugitive,
            Location::new(1),
            Ticket::Taxi,
            Location::new(2),
        ));
        let err = IllegalMove::NotAvailable(mv);
        assert_eq!(err.rejected(), &mv);
        assert_eq!(
            err.to_string(),
            "illegal move Fugitive TAXI 1 -> 2: not among the available moves"
        );
    }
}
