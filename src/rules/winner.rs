//! Win evaluation.
//!
//! Checked after every transition and once for the initial state. Capture
//! is checked first, so a single position never produces both sides as
//! winners.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use crate::core::{Move, Piece, PieceState};

/// The side that won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Fugitive,
    Seekers,
}

impl Side {
    /// The pieces making up this side.
    #[must_use]
    pub fn pieces(self, seekers: &Vector<PieceState>) -> OrdSet<Piece> {
        match self {
            Side::Fugitive => OrdSet::unit(Piece::Fugitive),
            Side::Seekers => seekers.iter().map(PieceState::piece).collect(),
        }
    }

    /// Check if `piece` belongs to this side.
    #[must_use]
    pub const fn includes(self, piece: Piece) -> bool {
        match self {
            Side::Fugitive => piece.is_fugitive(),
            Side::Seekers => piece.is_seeker(),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Fugitive => f.write_str("fugitive"),
            Side::Seekers => f.write_str("seekers"),
        }
    }
}

/// Everything the evaluator looks at.
#[derive(Clone, Copy, Debug)]
pub struct Position<'a> {
    pub fugitive: &'a PieceState,
    pub seekers: &'a Vector<PieceState>,
    /// Pieces still to act this round.
    pub to_move: &'a OrdSet<Piece>,
    /// Rounds played so far.
    pub round: usize,
    pub round_count: usize,
    /// Moves available to the pieces in `to_move`.
    pub available: &'a OrdSet<Move>,
}

/// Decide the winner of `position`, if the game is over.
///
/// - Seekers win on a capture, or when the fugitive is to move and cannot.
/// - The fugitive wins when it is to move after the last round, or when
///   the seekers are to move and none of them can.
#[must_use]
pub fn evaluate(position: &Position<'_>) -> Option<Side> {
    let captured = position
        .seekers
        .iter()
        .any(|s| s.location() == position.fugitive.location());
    if captured {
        return Some(Side::Seekers);
    }

    if position.to_move.contains(&Piece::Fugitive) {
        if position.round >= position.round_count {
            Some(Side::Fugitive)
        } else if position.available.is_empty() {
            Some(Side::Seekers)
        } else {
            None
        }
    } else if position.available.is_empty() {
        Some(Side::Fugitive)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Colour, Location, SingleMove, Ticket, Tickets};

    fn loc(n: u32) -> Location {
        Location::new(n)
    }

    fn seeker(colour: Colour, at: u32) -> PieceState {
        PieceState::new(Piece::Seeker(colour), loc(at), Tickets::new().with(Ticket::Taxi, 1))
    }

    fn some_move() -> OrdSet<Move> {
        OrdSet::unit(Move::Single(SingleMove::new(
            Piece::Fugitive,
            loc(1),
            Ticket::Taxi,
            loc(2),
        )))
    }

    struct Fixture {
        fugitive: PieceState,
        seekers: Vector<PieceState>,
        to_move: OrdSet<Piece>,
        available: OrdSet<Move>,
        round: usize,
        round_count: usize,
    }

    impl Fixture {
        fn new(fugitive_at: u32) -> Self {
            Self {
                fugitive: PieceState::fugitive(loc(fugitive_at), Tickets::new()),
                seekers: [seeker(Colour::Red, 5), seeker(Colour::Blue, 6)].into_iter().collect(),
                to_move: OrdSet::unit(Piece::Fugitive),
                available: some_move(),
                round: 0,
                round_count: 3,
            }
        }

        fn evaluate(&self) -> Option<Side> {
            evaluate(&Position {
                fugitive: &self.fugitive,
                seekers: &self.seekers,
                to_move: &self.to_move,
                round: self.round,
                round_count: self.round_count,
                available: &self.available,
            })
        }
    }

    #[test]
    fn test_ongoing() {
        assert_eq!(Fixture::new(1).evaluate(), None);
    }

    #[test]
    fn test_capture() {
        let fixture = Fixture::new(5);
        assert_eq!(fixture.evaluate(), Some(Side::Seekers));
    }

    #[test]
    fn test_capture_beats_exhausted_rounds() {
        let mut fixture = Fixture::new(6);
        fixture.round = 3;
        assert_eq!(fixture.evaluate(), Some(Side::Seekers));
    }

    #[test]
    fn test_fugitive_stalemated() {
        let mut fixture = Fixture::new(1);
        fixture.available = OrdSet::new();
        assert_eq!(fixture.evaluate(), Some(Side::Seekers));
    }

    #[test]
    fn test_rounds_exhausted() {
        let mut fixture = Fixture::new(1);
        fixture.round = 3;
        fixture.available = OrdSet::new();
        assert_eq!(fixture.evaluate(), Some(Side::Fugitive));
    }

    #[test]
    fn test_seekers_immobilized() {
        let mut fixture = Fixture::new(1);
        fixture.to_move = [Piece::Seeker(Colour::Red), Piece::Seeker(Colour::Blue)]
            .into_iter()
            .collect();
        fixture.available = OrdSet::new();
        assert_eq!(fixture.evaluate(), Some(Side::Fugitive));
    }

    #[test]
    fn test_last_round_seekers_still_chase() {
        let mut fixture = Fixture::new(1);
        fixture.round = 3;
        fixture.to_move = OrdSet::unit(Piece::Seeker(Colour::Red));
        assert_eq!(fixture.evaluate(), None);
    }

    #[test]
    fn test_side_pieces() {
        let seekers: Vector<PieceState> = [seeker(Colour::Red, 1), seeker(Colour::Green, 2)]
            .into_iter()
            .collect();

        assert_eq!(Side::Fugitive.pieces(&seekers), OrdSet::unit(Piece::Fugitive));
        let expected: OrdSet<Piece> = [Piece::Seeker(Colour::Red), Piece::Seeker(Colour::Green)]
            .into_iter()
            .collect();
        assert_eq!(Side::Seekers.pieces(&seekers), expected);

        assert!(Side::Seekers.includes(Piece::Seeker(Colour::Red)));
        assert!(!Side::Seekers.includes(Piece::Fugitive));
    }
}
