mod engine;
mod events;
mod state;
mod view;

// Public API of the progression subsystem.
pub use crate::error::{EventKind, ProgressError, SequenceViolation};
pub use engine::ProgressionEngine;
pub use events::{AdvanceOutcome, AnswerOutcome, EventOutcome, ProgressEvent};
pub use state::{ProgressState, ReviewState, Screen, SubmittedAnswer, WrongAnswers};
pub use view::{
    FinalReport, LevelProgress, PhaseProgress, PhaseStatus, Rank, WorldMapEntry, WorldMapStatus,
    percent,
};
