//! The fugitive's travel log.
//!
//! One entry per fugitive leg, appended in order and never rewritten.
//! Concealment is decided when an entry is written: on a non-reveal round
//! the destination is simply not stored, so no later query can leak it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::location::Location;
use super::ticket::Ticket;

/// One recorded fugitive leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    ticket: Ticket,
    location: Option<Location>,
}

impl LogEntry {
    /// An entry showing only the ticket.
    #[must_use]
    pub const fn hidden(ticket: Ticket) -> Self {
        Self {
            ticket,
            location: None,
        }
    }

    /// An entry showing the ticket and where the fugitive went.
    #[must_use]
    pub const fn reveal(ticket: Ticket, location: Location) -> Self {
        Self {
            ticket,
            location: Some(location),
        }
    }

    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// The fugitive's destination, present only on reveal rounds.
    #[must_use]
    pub const fn location(&self) -> Option<Location> {
        self.location
    }
}

/// Append-only sequence of log entries.
///
/// Backed by `im::Vector`, so appending shares structure with the
/// predecessor log instead of copying it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TravelLog {
    entries: Vector<LogEntry>,
}

impl TravelLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log with one more entry for a leg ending at `destination`.
    ///
    /// The destination is kept only if `reveal` is set.
    #[must_use]
    pub fn append(&self, ticket: Ticket, destination: Location, reveal: bool) -> Self {
        let entry = if reveal {
            LogEntry::reveal(ticket, destination)
        } else {
            LogEntry::hidden(ticket)
        };
        let mut entries = self.entries.clone();
        entries.push_back(entry);
        Self { entries }
    }

    /// Number of entries (equals rounds played).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, round: usize) -> Option<&LogEntry> {
        self.entries.get(round)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recently revealed fugitive location.
    #[must_use]
    pub fn last_revealed(&self) -> Option<Location> {
        self.entries.iter().rev().find_map(LogEntry::location)
    }
}

impl FromIterator<LogEntry> for TravelLog {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TravelLog {
    type Item = &'a LogEntry;
    type IntoIter = im::vector::Iter<'a, LogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
