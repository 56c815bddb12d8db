//! Transport modes, tickets, and per-piece ticket banks.
//!
//! ## Transport
//!
//! Each graph edge carries one or more transport modes. Every mode except
//! `Ferry` has a matching travel ticket; ferry crossings need a SECRET ticket.
//!
//! ## Ticket
//!
//! The three travel tickets plus two special tickets only the fugitive may
//! hold: SECRET (valid on any edge, hides the mode in the travel log) and
//! DOUBLE (two linked moves in one turn).
//!
//! ## Tickets
//!
//! A total, zero-defaulting count lookup. Asking for a ticket the piece has
//! never held answers zero.
//!
//! ```
//! use rust_pursuit::core::{Ticket, Tickets};
//!
//! let bank = Tickets::new().with(Ticket::Taxi, 4).with(Ticket::Bus, 2);
//! assert_eq!(bank.get(Ticket::Taxi), 4);
//! assert_eq!(bank.get(Ticket::Secret), 0);
//! ```

use serde::{Deserialize, Serialize};

/// Transport mode of a graph edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Transport {
    Taxi,
    Bus,
    Underground,
    Ferry,
}

impl Transport {
    /// The travel ticket that pays for this mode, if any.
    ///
    /// Ferry has none: only a SECRET ticket crosses a ferry edge.
    #[must_use]
    pub const fn required_ticket(self) -> Option<Ticket> {
        match self {
            Transport::Taxi => Some(Ticket::Taxi),
            Transport::Bus => Some(Ticket::Bus),
            Transport::Underground => Some(Ticket::Underground),
            Transport::Ferry => None,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Transport::Taxi => "taxi",
            Transport::Bus => "bus",
            Transport::Underground => "underground",
            Transport::Ferry => "ferry",
        };
        f.write_str(name)
    }
}

/// A consumable ticket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ticket {
    Taxi,
    Bus,
    Underground,
    Secret,
    Double,
}

impl Ticket {
    /// Number of ticket kinds.
    pub const COUNT: usize = 5;

    /// Every ticket kind.
    pub const ALL: [Ticket; Ticket::COUNT] = [
        Ticket::Taxi,
        Ticket::Bus,
        Ticket::Underground,
        Ticket::Secret,
        Ticket::Double,
    ];

    /// Check if this ticket pays for a transport mode directly.
    #[must_use]
    pub const fn is_travel(self) -> bool {
        matches!(self, Ticket::Taxi | Ticket::Bus | Ticket::Underground)
    }

    /// Check if this is SECRET or DOUBLE.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !self.is_travel()
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Ticket::Taxi => "TAXI",
            Ticket::Bus => "BUS",
            Ticket::Underground => "UNDERGROUND",
            Ticket::Secret => "SECRET",
            Ticket::Double => "DOUBLE",
        };
        f.write_str(name)
    }
}

/// Ticket counts for one piece.
///
/// Backed by a fixed array, so banks are `Copy` and never share storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tickets {
    counts: [u32; Ticket::COUNT],
}

impl Tickets {
    /// Create an empty bank.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counts: [0; Ticket::COUNT],
        }
    }

    /// Set the count for one ticket kind.
    #[must_use]
    pub fn with(mut self, ticket: Ticket, count: u32) -> Self {
        self.counts[ticket.index()] = count;
        self
    }

    /// Count held for a ticket kind (zero if never held).
    #[must_use]
    pub const fn get(&self, ticket: Ticket) -> u32 {
        self.counts[ticket.index()]
    }

    /// Check if at least one ticket of this kind is held.
    #[must_use]
    pub const fn has(&self, ticket: Ticket) -> bool {
        self.get(ticket) > 0
    }

    /// Check if at least `count` tickets of this kind are held.
    #[must_use]
    pub const fn has_at_least(&self, ticket: Ticket, count: u32) -> bool {
        self.get(ticket) >= count
    }

    /// Total number of tickets held.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over the kinds with a positive count.
    pub fn held(&self) -> impl Iterator<Item = (Ticket, u32)> + '_ {
        Ticket::ALL
            .into_iter()
            .map(move |t| (t, self.get(t)))
            .filter(|&(_, n)| n > 0)
    }

    /// Bank with one ticket of this kind removed.
    ///
    /// Returns `None` if none is held.
    #[must_use]
    pub fn spend(self, ticket: Ticket) -> Option<Self> {
        let count = self.get(ticket).checked_sub(1)?;
        Some(self.with(ticket, count))
    }

    /// Bank with one ticket of this kind added.
    #[must_use]
    pub fn receive(self, ticket: Ticket) -> Self {
        let count = self.get(ticket).saturating_add(1);
        self.with(ticket, count)
    }
}

impl FromIterator<(Ticket, u32)> for Tickets {
    fn from_iter<I: IntoIterator<Item = (Ticket, u32)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Tickets::new(), |bank, (ticket, count)| bank.with(ticket, count))
    }
}
