//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use quest_core::model::CatalogError;

/// The engine events that carry ordering preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SubmitAnswer,
    Advance,
    AcknowledgePhaseTransition,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::SubmitAnswer => write!(f, "submit an answer"),
            EventKind::Advance => write!(f, "advance"),
            EventKind::AcknowledgePhaseTransition => write!(f, "acknowledge a phase transition"),
        }
    }
}

/// Why an event was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceViolation {
    #[error("the quest is already complete")]
    GameComplete,
    #[error("a phase transition is waiting to be acknowledged")]
    TransitionPending,
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("the current question has not been answered yet")]
    NotAnswered,
    #[error("no phase transition is pending")]
    NoTransitionPending,
    #[error("a review is in progress")]
    ReviewInProgress,
}

/// Errors emitted by `ProgressionEngine`.
///
/// All of them are contract violations by the caller; none is transient.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("cannot {event}: {reason}")]
    InvalidEventSequence {
        event: EventKind,
        reason: SequenceViolation,
    },
    #[error("option {index} is out of range for {len} options")]
    OptionIndexOutOfRange { index: usize, len: usize },
    #[error("lesson catalog is empty")]
    EmptyCatalog,
    #[error(transparent)]
    Catalog(CatalogError),
}

impl ProgressError {
    pub(crate) fn sequence(event: EventKind, reason: SequenceViolation) -> Self {
        Self::InvalidEventSequence { event, reason }
    }
}

impl From<CatalogError> for ProgressError {
    fn from(err: CatalogError) -> Self {
        // A lesson pointing at a missing phase leaves nothing playable either.
        match err {
            CatalogError::Empty | CatalogError::UnknownPhase { .. } => Self::EmptyCatalog,
            other => Self::Catalog(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::model::PhaseId;

    #[test]
    fn empty_catalog_maps_to_dedicated_variant() {
        assert_eq!(ProgressError::from(CatalogError::Empty), ProgressError::EmptyCatalog);
        let unknown = CatalogError::UnknownPhase {
            index: 0,
            phase: PhaseId::new(3),
        };
        assert_eq!(ProgressError::from(unknown), ProgressError::EmptyCatalog);
    }

    #[test]
    fn other_catalog_defects_stay_wrapped() {
        let duplicate = CatalogError::DuplicatePhase { id: PhaseId::new(1) };
        assert_eq!(
            ProgressError::from(duplicate.clone()),
            ProgressError::Catalog(duplicate)
        );
    }

    #[test]
    fn sequence_errors_read_naturally() {
        let err = ProgressError::sequence(EventKind::Advance, SequenceViolation::NotAnswered);
        assert_eq!(
            err.to_string(),
            "cannot advance: the current question has not been answered yet"
        );
    }
}
