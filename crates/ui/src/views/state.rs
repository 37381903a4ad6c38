use services::ProgressError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The engine refused the action in its current state.
    Rejected,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_progress(err: &ProgressError) -> Self {
        match err {
            ProgressError::InvalidEventSequence { .. }
            | ProgressError::OptionIndexOutOfRange { .. } => ViewError::Rejected,
            _ => ViewError::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Rejected => "That move isn't available right now.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{EventKind, SequenceViolation};

    #[test]
    fn engine_rejections_map_to_rejected() {
        let err = ProgressError::InvalidEventSequence {
            event: EventKind::Advance,
            reason: SequenceViolation::NotAnswered,
        };
        assert_eq!(ViewError::from_progress(&err), ViewError::Rejected);
        assert_eq!(
            ViewError::from_progress(&ProgressError::EmptyCatalog),
            ViewError::Unknown
        );
    }
}
