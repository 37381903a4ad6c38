use quest_core::model::PhaseId;

/// Inputs accepted by `ProgressionEngine::handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    SubmitAnswer(usize),
    Advance,
    AcknowledgePhaseTransition,
    Restart,
}

/// Result of grading one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub lesson_index: usize,
    pub selected: usize,
    pub correct_option: usize,
    pub is_correct: bool,
    pub xp_gained: u32,
    pub in_review: bool,
}

/// What an `Advance` did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next lesson of the same phase.
    NextLesson { lesson_index: usize },
    /// Crossed into a new phase; the transition awaits acknowledgement.
    PhaseUnlocked { phase: PhaseId, lesson_index: usize },
    /// The phase boundary is gated until its wrong answers are cleared.
    ReviewStarted { phase: PhaseId, queue_len: usize },
    /// Moved to the next wrong answer of the pass.
    ReviewContinues { remaining: usize },
    /// Pass finished with items left; starting over from the first.
    ReviewRestarted { remaining: usize },
    /// Terminal.
    Completed,
}

/// Result of `ProgressionEngine::handle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Answered(AnswerOutcome),
    Advanced(AdvanceOutcome),
    TransitionAcknowledged(PhaseId),
    Restarted,
}
