//! Move representation.
//!
//! A move is one of two closed variants:
//! - `SingleMove`: one edge, one ticket
//! - `DoubleMove`: two linked edges in one fugitive turn, paid with a DOUBLE
//!   ticket plus one ticket per leg
//!
//! Moves are plain values compared field by field, so move sets deduplicate
//! identical (source, ticket, destination) tuples automatically.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::location::Location;
use super::piece::Piece;
use super::ticket::Ticket;

/// Tickets consumed by a move. Never more than three.
pub type MoveTickets = SmallVec<[Ticket; 3]>;

/// A move along a single edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SingleMove {
    pub piece: Piece,
    pub source: Location,
    pub ticket: Ticket,
    pub destination: Location,
}

impl SingleMove {
    /// Create a single move.
    #[must_use]
    pub const fn new(
        piece: Piece,
        source: Location,
        ticket: Ticket,
        destination: Location,
    ) -> Self {
        Self {
            piece,
            source,
            ticket,
            destination,
        }
    }
}

/// Two chained moves taken by the fugitive in one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoubleMove {
    pub piece: Piece,
    pub source: Location,
    pub first_ticket: Ticket,
    pub first_destination: Location,
    pub second_ticket: Ticket,
    pub second_destination: Location,
}

impl DoubleMove {
    /// Chain two single moves, the second starting where the first ends.
    ///
    /// Returns `None` if the legs belong to different pieces or do not connect.
    #[must_use]
    pub fn chain(first: SingleMove, second: SingleMove) -> Option<Self> {
        if first.piece != second.piece || first.destination != second.source {
            return None;
        }
        Some(Self {
            piece: first.piece,
            source: first.source,
            first_ticket: first.ticket,
            first_destination: first.destination,
            second_ticket: second.ticket,
            second_destination: second.destination,
        })
    }

    /// The two legs as single moves.
    #[must_use]
    pub const fn legs(&self) -> [SingleMove; 2] {
        [
            SingleMove::new(self.piece, self.source, self.first_ticket, self.first_destination),
            SingleMove::new(
                self.piece,
                self.first_destination,
                self.second_ticket,
                self.second_destination,
            ),
        ]
    }
}

/// A legal action for one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    Single(SingleMove),
    Double(DoubleMove),
}

impl Move {
    /// The piece making this move.
    #[must_use]
    pub const fn piece(&self) -> Piece {
        match self {
            Move::Single(m) => m.piece,
            Move::Double(m) => m.piece,
        }
    }

    /// Where the move starts.
    #[must_use]
    pub const fn source(&self) -> Location {
        match self {
            Move::Single(m) => m.source,
            Move::Double(m) => m.source,
        }
    }

    /// Where the piece ends up.
    #[must_use]
    pub const fn destination(&self) -> Location {
        match self {
            Move::Single(m) => m.destination,
            Move::Double(m) => m.second_destination,
        }
    }

    /// Every ticket the move consumes, DOUBLE included.
    #[must_use]
    pub fn tickets(&self) -> MoveTickets {
        match self {
            Move::Single(m) => smallvec![m.ticket],
            Move::Double(m) => smallvec![Ticket::Double, m.first_ticket, m.second_ticket],
        }
    }

    /// The legs of the move, in order. One for single moves, two for doubles.
    #[must_use]
    pub fn legs(&self) -> SmallVec<[SingleMove; 2]> {
        match self {
            Move::Single(m) => smallvec![*m],
            Move::Double(m) => SmallVec::from_buf(m.legs()),
        }
    }

    /// Check if this is a double move.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Move::Double(_))
    }
}

impl From<SingleMove> for Move {
    fn from(m: SingleMove) -> Self {
        Move::Single(m)
    }
}

impl From<DoubleMove> for Move {
    fn from(m: DoubleMove) -> Self {
        Move::Double(m)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Single(m) => {
                write!(f, "{} {} {} -> {}", m.piece, m.ticket, m.source, m.destination)
            }
            Move::Double(m) => write!(
                f,
                "{} DOUBLE {} {} -> {} {} -> {}",
                m.piece,
                m.first_ticket,
                m.source,
                m.first_destination,
                m.second_ticket,
                m.second_destination
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::Colour;

    fn loc(n: u32) -> Location {
        Location::new(n)
    }

    #[test]
    fn test_single_move_accessors() {
        let mv: Move = SingleMove::new(Piece::Fugitive, loc(1), Ticket::Taxi, loc(2)).into();

        assert_eq!(mv.piece(), Piece::Fugitive);
        assert_eq!(mv.source(), loc(1));
        assert_eq!(mv.destination(), loc(2));
        assert_eq!(mv.tickets().as_slice(), &[Ticket::Taxi]);
        assert!(!mv.is_double());
    }

    #[test]
    fn test_double_move_chain() {
        let first = SingleMove::new(Piece::Fugitive, loc(1), Ticket::Taxi, loc(2));
        let second = SingleMove::new(Piece::Fugitive, loc(2), Ticket::Bus, loc(5));
        let double = DoubleMove::chain(first, second).unwrap();

        assert_eq!(double.legs(), [first, second]);

        let mv = Move::Double(double);
        assert_eq!(mv.destination(), loc(5));
        assert_eq!(mv.tickets().as_slice(), &[Ticket::Double, Ticket::Taxi, Ticket::Bus]);
        assert_eq!(mv.legs().as_slice(), &[first, second]);
    }

    #[test]
    fn test_chain_rejects_disconnected_legs() {
        let first = SingleMove::new(Piece::Fugitive, loc(1), Ticket::Taxi, loc(2));
        let elsewhere = SingleMove::new(Piece::Fugitive, loc(3), Ticket::Taxi, loc(4));
        let other_piece = SingleMove::new(Piece::Seeker(Colour::Red), loc(2), Ticket::Taxi, loc(4));

        assert_eq!(DoubleMove::chain(first, elsewhere), None);
        assert_eq!(DoubleMove::chain(first, other_piece), None);
    }

    #[test]
    fn test_move_equality_is_by_value() {
        let a = Move::from(SingleMove::new(Piece::Fugitive, loc(1), Ticket::Secret, loc(2)));
        let b = Move::from(SingleMove::new(Piece::Fugitive, loc(1), Ticket::Secret, loc(2)));
        let c = Move::from(SingleMove::new(Piece::Fugitive, loc(1), Ticket::Taxi, loc(2)));

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: im::OrdSet<Move> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::from(SingleMove::new(
            Piece::Seeker(Colour::Blue),
            loc(4),
            Ticket::Bus,
            loc(9),
        ));
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }

    #[test]
    fn test_display() {
        let mv = Move::from(SingleMove::new(Piece::Fugitive, loc(1), Ticket::Taxi, loc(2)));
        assert_eq!(format!("{}", mv), "Fugitive TAXI 1 -> 2");
    }
}
