#![forbid(unsafe_code)]

pub mod error;
pub mod progression;

pub use error::{EventKind, ProgressError, SequenceViolation};

pub use progression::{
    AdvanceOutcome, AnswerOutcome, EventOutcome, FinalReport, LevelProgress, PhaseProgress,
    PhaseStatus, ProgressEvent, ProgressState, ProgressionEngine, Rank, ReviewState, Screen,
    SubmittedAnswer, WorldMapEntry, WorldMapStatus, WrongAnswers,
};
