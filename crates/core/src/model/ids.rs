use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Phase
///
/// Phase ids are ordered: a phase with a lower id is visited before a phase
/// with a higher one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhaseId(u32);

impl PhaseId {
    /// Creates a new `PhaseId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PhaseId({})", self.0)
    }
}

impl fmt::Display for PhaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr ───────────────────────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for PhaseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(PhaseId::new)
            .map_err(|_| ParseIdError {
                kind: "PhaseId".to_string(),
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_id_display() {
        let id = PhaseId::new(3);
        assert_eq!(id.to_string(), "3");
        assert_eq!(format!("{id:?}"), "PhaseId(3)");
    }

    #[test]
    fn test_phase_id_from_str() {
        let id: PhaseId = " 4 ".parse().unwrap();
        assert_eq!(id, PhaseId::new(4));
    }

    #[test]
    fn test_phase_id_from_str_invalid() {
        let err = "forest".parse::<PhaseId>().unwrap_err();
        assert_eq!(err.to_string(), "failed to parse PhaseId from string");
    }

    #[test]
    fn test_phase_id_orders_by_value() {
        assert!(PhaseId::new(1) < PhaseId::new(2));
    }

    #[test]
    fn test_phase_id_serializes_as_number() {
        let json = serde_json::to_string(&PhaseId::new(2)).unwrap();
        assert_eq!(json, "2");
        let back: PhaseId = serde_json::from_str("7").unwrap();
        assert_eq!(back, PhaseId::new(7));
    }
}
