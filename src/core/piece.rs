//! Piece identity.
//!
//! ## Piece
//!
//! A closed tagged identity: exactly one `Fugitive`, and one `Seeker` per
//! display colour. Pieces are compared by identity, never by location.
//!
//! ## Colour
//!
//! The seeker's display attribute. Two seekers in one game may never share a
//! colour, so the colour doubles as the seeker's identity.

use serde::{Deserialize, Serialize};

/// Display colour that identifies a seeker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
    White,
    Yellow,
}

impl Colour {
    /// Every colour, in seating order.
    pub const ALL: [Colour; 5] = [
        Colour::Red,
        Colour::Green,
        Colour::Blue,
        Colour::White,
        Colour::Yellow,
    ];

    /// Web colour used when rendering the seeker.
    #[must_use]
    pub const fn web_colour(self) -> &'static str {
        match self {
            Colour::Red => "#f44336",
            Colour::Green => "#4caf50",
            Colour::Blue => "#2196f3",
            Colour::White => "#ffffff",
            Colour::Yellow => "#ffeb3b",
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Colour::Red => "Red",
            Colour::Green => "Green",
            Colour::Blue => "Blue",
            Colour::White => "White",
            Colour::Yellow => "Yellow",
        };
        f.write_str(name)
    }
}

/// A piece on the board.
///
/// Orders the fugitive first, then seekers by colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// The concealed piece being pursued.
    Fugitive,
    /// A pursuer, identified by its colour.
    Seeker(Colour),
}

impl Piece {
    /// Check if this is the fugitive.
    #[must_use]
    pub const fn is_fugitive(self) -> bool {
        matches!(self, Piece::Fugitive)
    }

    /// Check if this is a seeker.
    #[must_use]
    pub const fn is_seeker(self) -> bool {
        matches!(self, Piece::Seeker(_))
    }

    /// The seeker's colour, if this is a seeker.
    #[must_use]
    pub const fn colour(self) -> Option<Colour> {
        match self {
            Piece::Fugitive => None,
            Piece::Seeker(colour) => Some(colour),
        }
    }

    /// Whether this piece may ever hold SECRET and DOUBLE tickets.
    #[must_use]
    pub const fn may_hold_special_tickets(self) -> bool {
        match self {
            Piece::Fugitive => true,
            Piece::Seeker(_) => false,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Fugitive => f.write_str("Fugitive"),
            Piece::Seeker(colour) => write!(f, "{} seeker", colour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_roles() {
        assert!(Piece::Fugitive.is_fugitive());
        assert!(!Piece::Fugitive.is_seeker());
        assert!(Piece::Seeker(Colour::Red).is_seeker());
        assert_eq!(Piece::Seeker(Colour::Blue).colour(), Some(Colour::Blue));
        assert_eq!(Piece::Fugitive.colour(), None);
    }

    #[test]
    fn test_piece_ordering_puts_fugitive_first() {
        let mut pieces = vec![
            Piece::Seeker(Colour::Yellow),
            Piece::Fugitive,
            Piece::Seeker(Colour::Red),
        ];
        pieces.sort();
        assert_eq!(
            pieces,
            vec![Piece::Fugitive, Piece::Seeker(Colour::Red), Piece::Seeker(Colour::Yellow)]
        );
    }

    #[test]
    fn test_special_ticket_rights() {
        assert!(Piece::Fugitive.may_hold_special_tickets());
        for colour in Colour::ALL {
            assert!(!Piece::Seeker(colour).may_hold_special_tickets());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Piece::Fugitive), "Fugitive");
        assert_eq!(format!("{}", Piece::Seeker(Colour::Green)), "Green seeker");
        assert_eq!(Colour::White.web_colour(), "#ffffff");
    }
}
