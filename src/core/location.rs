//! Board locations.
//!
//! A `Location` is an opaque node identifier in the transport graph.
//! The engine only ever compares locations for equality; the derived
//! ordering exists so that moves can live in ordered sets.
//!
//! ```
//! use rust_pursuit::core::Location;
//!
//! let a = Location::new(13);
//! assert_eq!(a.raw(), 13);
//! assert_eq!(format!("{}", a), "13");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier of a node in the transport graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(pub u32);

impl Location {
    /// Create a new location.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw node number.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for Location {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_basics() {
        let loc = Location::new(42);
        assert_eq!(loc.raw(), 42);
        assert_eq!(loc, Location::from(42));
        assert_ne!(loc, Location::new(43));
    }

    #[test]
    fn test_location_serializes_as_number() {
        let json = serde_json::to_string(&Location::new(7)).unwrap();
        assert_eq!(json, "7");

        let back: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Location::new(7));
    }
}
