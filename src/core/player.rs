//! Per-piece state: identity, location, ticket bank.
//!
//! `PieceState` values are never mutated in place by the engine. Every
//! transition produces a replacement value.

use serde::{Deserialize, Serialize};

use super::location::Location;
use super::moves::Move;
use super::piece::Piece;
use super::ticket::{Ticket, Tickets};

/// A piece and everything it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceState {
    piece: Piece,
    location: Location,
    tickets: Tickets,
}

impl PieceState {
    /// Create a piece state.
    #[must_use]
    pub const fn new(piece: Piece, location: Location, tickets: Tickets) -> Self {
        Self {
            piece,
            location,
            tickets,
        }
    }

    /// Create the fugitive's state.
    #[must_use]
    pub const fn fugitive(location: Location, tickets: Tickets) -> Self {
        Self::new(Piece::Fugitive, location, tickets)
    }

    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub const fn location(&self) -> Location {
        self.location
    }

    #[must_use]
    pub const fn tickets(&self) -> Tickets {
        self.tickets
    }

    /// Check if at least one ticket of this kind is held.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.tickets.has(ticket)
    }

    /// First special ticket held, if any.
    #[must_use]
    pub fn special_ticket(&self) -> Option<Ticket> {
        [Ticket::Secret, Ticket::Double]
            .into_iter()
            .find(|&t| self.tickets.has(t))
    }

    /// State after making `mv`: moved to its final destination, every
    /// consumed ticket spent.
    ///
    /// Returns `None` if `mv` belongs to another piece or the bank cannot
    /// pay for it.
    #[must_use]
    pub fn travel(&self, mv: &Move) -> Option<Self> {
        if mv.piece() != self.piece || mv.source() != self.location {
            return None;
        }
        let tickets = mv
            .tickets()
            .into_iter()
            .try_fold(self.tickets, Tickets::spend)?;
        Some(Self {
            location: mv.destination(),
            tickets,
            ..*self
        })
    }

    /// State after being handed one ticket.
    #[must_use]
    pub fn receive(&self, ticket: Ticket) -> Self {
        Self {
            tickets: self.tickets.receive(ticket),
            ..*self
        }
    }
}
