//! The standard rule set.
//!
//! A 24-round game revealing the fugitive after rounds 3, 8, 13, 18 and 24,
//! with the usual starting ticket allotments.

use crate::core::{ConfigError, GameSetup, Ticket, Tickets};
use crate::graph::TransportGraph;

/// Reveal flags for the standard 24-round game.
pub const STANDARD_24_ROUNDS: [bool; 24] = [
    false, false, true, false, false, false, false, true, false, false, false, false, true, false,
    false, false, false, true, false, false, false, false, false, true,
];

/// Starting tickets for the fugitive.
#[must_use]
pub fn fugitive_tickets() -> Tickets {
    Tickets::new()
        .with(Ticket::Taxi, 4)
        .with(Ticket::Bus, 3)
        .with(Ticket::Underground, 3)
        .with(Ticket::Double, 2)
        .with(Ticket::Secret, 5)
}

/// Starting tickets for each seeker.
#[must_use]
pub fn seeker_tickets() -> Tickets {
    Tickets::new()
        .with(Ticket::Taxi, 11)
        .with(Ticket::Bus, 8)
        .with(Ticket::Underground, 4)
}

impl<G: TransportGraph> GameSetup<G> {
    /// Setup using the standard 24-round schedule.
    pub fn standard(graph: G) -> Result<Self, ConfigError> {
        Self::new(graph, STANDARD_24_ROUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, Transport};
    use crate::graph::Graph;

    #[test]
    fn test_standard_reveal_rounds() {
        let revealed: Vec<usize> = STANDARD_24_ROUNDS
            .iter()
            .enumerate()
            .filter(|&(_, &reveal)| reveal)
            .map(|(i, _)| i + 1)
            .collect();
        assert_eq!(revealed, vec![3, 8, 13, 18, 24]);
    }

    #[test]
    fn test_standard_tickets() {
        let fugitive = fugitive_tickets();
        assert_eq!(fugitive.total(), 17);
        assert_eq!(fugitive.get(Ticket::Double), 2);

        let seeker = seeker_tickets();
        assert_eq!(seeker.get(Ticket::Secret), 0);
        assert_eq!(seeker.get(Ticket::Double), 0);
        assert_eq!(seeker.total(), 23);
    }

    #[test]
    fn test_standard_setup() {
        let graph = Graph::new().with_edge(Location::new(1), Location::new(2), Transport::Bus);
        let setup = GameSetup::standard(graph).unwrap();
        assert_eq!(setup.round_count(), 24);
        assert!(setup.is_reveal(2));
        assert!(setup.is_reveal(23));
        assert!(!setup.is_reveal(0));
    }
}
