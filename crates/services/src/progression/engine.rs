use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use quest_core::model::{Lesson, LessonCatalog, Phase, PhaseId, ProgressionRules};

use super::events::{AdvanceOutcome, AnswerOutcome, EventOutcome, ProgressEvent};
use super::state::{ProgressState, ReviewState, Screen, SubmittedAnswer};
use super::view::{
    self, FinalReport, LevelProgress, PhaseProgress, WorldMapStatus,
};
use crate::error::{EventKind, ProgressError, SequenceViolation};

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Deterministic progression state machine over a lesson catalog.
///
/// The engine is the only writer of `ProgressState`. Every event either fully
/// applies or leaves the state untouched and returns a `ProgressError`.
#[derive(Clone)]
pub struct ProgressionEngine {
    catalog: Arc<LessonCatalog>,
    rules: ProgressionRules,
    state: ProgressState,
}

impl ProgressionEngine {
    /// Start a fresh session at the first lesson with default rules.
    #[must_use]
    pub fn new(catalog: Arc<LessonCatalog>) -> Self {
        Self {
            catalog,
            rules: ProgressionRules::default(),
            state: ProgressState::default(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: ProgressionRules) -> Self {
        self.rules = rules;
        self
    }

    /// Build the catalog and the engine in one step.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::EmptyCatalog` when there are no lessons and
    /// `ProgressError::Catalog` for any other catalog defect, such as a lesson
    /// that references a phase missing from `phases`.
    pub fn from_parts(phases: Vec<Phase>, lessons: Vec<Lesson>) -> Result<Self, ProgressError> {
        let catalog = LessonCatalog::new(phases, lessons)?;
        Ok(Self::new(Arc::new(catalog)))
    }

    #[must_use]
    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn catalog_handle(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn rules(&self) -> &ProgressionRules {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    //
    // ─── EVENTS ───────────────────────────────────────────────────────────────
    //

    /// Dispatch a single event.
    ///
    /// # Errors
    ///
    /// Propagates the error of the matching event handler.
    pub fn handle(&mut self, event: ProgressEvent) -> Result<EventOutcome, ProgressError> {
        match event {
            ProgressEvent::SubmitAnswer(selected) => {
                self.submit_answer(selected).map(EventOutcome::Answered)
            }
            ProgressEvent::Advance => self.advance().map(EventOutcome::Advanced),
            ProgressEvent::AcknowledgePhaseTransition => self
                .acknowledge_phase_transition()
                .map(EventOutcome::TransitionAcknowledged),
            ProgressEvent::Restart => {
                self.restart();
                Ok(EventOutcome::Restarted)
            }
        }
    }

    /// Grade `selected` against the question on screen.
    ///
    /// Does not move to the next question; call `advance` for that.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidEventSequence` when the quest is over, a
    /// phase transition is pending, or the question was already answered.
    /// Returns `ProgressError::OptionIndexOutOfRange` when `selected` is not an
    /// option of the question. The state is unchanged on error.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, ProgressError> {
        self.ensure_awaiting_answer().inspect_err(|err| {
            warn!(%err, selected, "rejected answer");
        })?;

        let catalog = Arc::clone(&self.catalog);
        let lesson_index = self.presented_lesson_index();
        let lesson = &catalog.lessons()[lesson_index];
        if selected >= lesson.option_count() {
            let err = ProgressError::OptionIndexOutOfRange {
                index: selected,
                len: lesson.option_count(),
            };
            warn!(%err, lesson = lesson_index, "rejected answer");
            return Err(err);
        }

        let is_correct = lesson.is_correct(selected);
        let in_review = self.state.review.is_some();
        let mut xp_gained = 0;

        if is_correct {
            xp_gained = self.rules.xp_per_correct();
            self.state.xp = self.state.xp.saturating_add(xp_gained);
            self.state.correct_answer_count = self.state.correct_answer_count.saturating_add(1);
            self.state.streak = self.state.streak.saturating_add(1);
            self.state.best_streak = self.state.best_streak.max(self.state.streak);
            if in_review && self.state.wrong_answers.resolve(lesson_index) {
                debug!(lesson = lesson_index, "wrong answer remediated");
            }
        } else {
            self.state.streak = 0;
            if !in_review && self.state.wrong_answers.record(lesson_index, lesson.phase()) {
                debug!(lesson = lesson_index, phase = %lesson.phase(), "wrong answer recorded");
            }
        }

        self.state.answer = Some(SubmittedAnswer {
            lesson_index,
            selected,
            is_correct,
        });
        debug!(
            lesson = lesson_index,
            selected,
            is_correct,
            in_review,
            xp = self.state.xp,
            "answer submitted"
        );

        Ok(AnswerOutcome {
            lesson_index,
            selected,
            correct_option: lesson.correct_option(),
            is_correct,
            xp_gained,
            in_review,
        })
    }

    /// Move past the answered question.
    ///
    /// In review mode this walks the phase's wrong-answer queue; otherwise it
    /// moves to the next lesson, gating phase boundaries (and the end of the
    /// quest) on an empty wrong-answer queue for the phase being left.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidEventSequence` when the quest is over, a
    /// phase transition is pending, or the question on screen has not been
    /// answered yet.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, ProgressError> {
        let answer = self.ensure_answered().inspect_err(|err| {
            warn!(%err, "rejected advance");
        })?;
        self.state.answer = None;

        let outcome = match self.state.review {
            Some(review) => self.advance_review(review, answer),
            None => self.advance_lesson(),
        };
        debug!(?outcome, lesson = self.state.current_lesson_index, "advanced");
        Ok(outcome)
    }

    /// Dismiss the pending phase transition. Position is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidEventSequence` if no transition is pending
    /// or the transition is still scheduled behind an open review.
    pub fn acknowledge_phase_transition(&mut self) -> Result<PhaseId, ProgressError> {
        if self.state.review.is_some() {
            let err = ProgressError::sequence(
                EventKind::AcknowledgePhaseTransition,
                SequenceViolation::ReviewInProgress,
            );
            warn!(%err, "rejected acknowledgement");
            return Err(err);
        }
        self.state.pending_phase_transition.take().ok_or_else(|| {
            let err = ProgressError::sequence(
                EventKind::AcknowledgePhaseTransition,
                SequenceViolation::NoTransitionPending,
            );
            warn!(%err, "rejected acknowledgement");
            err
        })
    }

    /// Reset to a fresh session, dropping all wrong-answer history.
    pub fn restart(&mut self) {
        self.state = ProgressState::default();
        info!("progress restarted");
    }

    fn advance_lesson(&mut self) -> AdvanceOutcome {
        let current = self.state.current_lesson_index;
        let current_phase = self.current_lesson().phase();

        if self.catalog.is_last_lesson(current) {
            if self.state.wrong_answers.count_for_phase(current_phase) > 0 {
                return self.begin_review(current_phase);
            }
            return self.complete();
        }

        let next = current + 1;
        let next_phase = self.catalog.lessons()[next].phase();
        if next_phase == current_phase {
            self.state.current_lesson_index = next;
            return AdvanceOutcome::NextLesson { lesson_index: next };
        }

        if self.state.wrong_answers.count_for_phase(current_phase) > 0 {
            self.state.pending_phase_transition = Some(next_phase);
            return self.begin_review(current_phase);
        }
        self.unlock(next_phase)
    }

    fn advance_review(&mut self, mut review: ReviewState, answer: SubmittedAnswer) -> AdvanceOutcome {
        let queue = self.state.wrong_answers.for_phase(review.phase);
        // A correction removes the item at the cursor, so the next one slides into place.
        let next_cursor = if answer.is_correct {
            review.cursor
        } else {
            review.cursor + 1
        };

        if next_cursor < queue.len() {
            review.cursor = next_cursor;
            self.state.review = Some(review);
            return AdvanceOutcome::ReviewContinues {
                remaining: queue.len(),
            };
        }
        if !queue.is_empty() {
            review.cursor = 0;
            self.state.review = Some(review);
            debug!(phase = %review.phase, remaining = queue.len(), "review pass restarted");
            return AdvanceOutcome::ReviewRestarted {
                remaining: queue.len(),
            };
        }

        self.state.review = None;
        info!(phase = %review.phase, "review cleared");
        let current = self.state.current_lesson_index;
        if self.catalog.is_last_lesson(current) {
            return self.complete();
        }
        // The transition was scheduled when review began; now the position catches up.
        let next_phase = self.catalog.lessons()[current + 1].phase();
        self.unlock(next_phase)
    }

    fn begin_review(&mut self, phase: PhaseId) -> AdvanceOutcome {
        let queue_len = self.state.wrong_answers.count_for_phase(phase);
        self.state.review = Some(ReviewState { phase, cursor: 0 });
        info!(%phase, queue_len, "review started");
        AdvanceOutcome::ReviewStarted { phase, queue_len }
    }

    fn unlock(&mut self, phase: PhaseId) -> AdvanceOutcome {
        let lesson_index = self.state.current_lesson_index + 1;
        self.state.current_lesson_index = lesson_index;
        self.state.pending_phase_transition = Some(phase);
        info!(%phase, lesson = lesson_index, "phase unlocked");
        AdvanceOutcome::PhaseUnlocked {
            phase,
            lesson_index,
        }
    }

    fn complete(&mut self) -> AdvanceOutcome {
        self.state.game_complete = true;
        info!(
            xp = self.state.xp,
            correct = self.state.correct_answer_count,
            "quest complete"
        );
        AdvanceOutcome::Completed
    }

    fn ensure_open(&self, event: EventKind) -> Result<(), ProgressError> {
        if self.state.game_complete {
            return Err(ProgressError::sequence(event, SequenceViolation::GameComplete));
        }
        // During review the pending transition is only scheduled, not yet shown.
        if self.state.pending_phase_transition.is_some() && self.state.review.is_none() {
            return Err(ProgressError::sequence(
                event,
                SequenceViolation::TransitionPending,
            ));
        }
        Ok(())
    }

    fn ensure_awaiting_answer(&self) -> Result<(), ProgressError> {
        self.ensure_open(EventKind::SubmitAnswer)?;
        if self.state.answer.is_some() {
            return Err(ProgressError::sequence(
                EventKind::SubmitAnswer,
                SequenceViolation::AlreadyAnswered,
            ));
        }
        Ok(())
    }

    fn ensure_answered(&self) -> Result<SubmittedAnswer, ProgressError> {
        self.ensure_open(EventKind::Advance)?;
        self.state.answer.ok_or(ProgressError::sequence(
            EventKind::Advance,
            SequenceViolation::NotAnswered,
        ))
    }

    //
    // ─── QUERIES ──────────────────────────────────────────────────────────────
    //

    /// Lesson at the main position. During review this is the last lesson of
    /// the phase under review, not the item being remediated.
    #[must_use]
    pub fn current_lesson(&self) -> &Lesson {
        &self.catalog.lessons()[self.state.current_lesson_index]
    }

    #[must_use]
    pub fn current_lesson_index(&self) -> usize {
        self.state.current_lesson_index
    }

    #[must_use]
    pub fn current_phase(&self) -> &Phase {
        self.catalog
            .phase(self.current_lesson().phase())
            .unwrap_or_else(|| self.catalog.first_phase())
    }

    /// Index of the question on screen: the review item in review mode, the
    /// current lesson otherwise. Stays on the answered question until `advance`.
    #[must_use]
    pub fn presented_lesson_index(&self) -> usize {
        if let Some(answer) = self.state.answer {
            return answer.lesson_index;
        }
        self.review_item_index()
            .unwrap_or(self.state.current_lesson_index)
    }

    #[must_use]
    pub fn presented_lesson(&self) -> &Lesson {
        &self.catalog.lessons()[self.presented_lesson_index()]
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.rules.level_for(self.state.xp)
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.state.xp
    }

    #[must_use]
    pub fn correct_answer_count(&self) -> u32 {
        self.state.correct_answer_count
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.state.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.state.best_streak
    }

    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.state.game_complete
    }

    #[must_use]
    pub fn pending_phase_transition(&self) -> Option<&Phase> {
        self.state
            .pending_phase_transition
            .and_then(|id| self.catalog.phase(id))
    }

    #[must_use]
    pub fn is_in_review_mode(&self) -> bool {
        self.state.review.is_some()
    }

    #[must_use]
    pub fn review_phase(&self) -> Option<&Phase> {
        self.state
            .review
            .and_then(|review| self.catalog.phase(review.phase))
    }

    /// The wrong answer being remediated, with its lesson index.
    #[must_use]
    pub fn current_review_item(&self) -> Option<(usize, &Lesson)> {
        self.state.review?;
        let index = self.presented_lesson_index();
        self.catalog.lesson(index).map(|lesson| (index, lesson))
    }

    /// Unremediated lesson indices of `phase`, ascending.
    #[must_use]
    pub fn review_queue_for_phase(&self, phase: PhaseId) -> Vec<usize> {
        self.state.wrong_answers.for_phase(phase)
    }

    #[must_use]
    pub fn review_queue_size_for_phase(&self, phase: PhaseId) -> usize {
        self.state.wrong_answers.count_for_phase(phase)
    }

    #[must_use]
    pub fn last_answer(&self) -> Option<SubmittedAnswer> {
        self.state.answer
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.ensure_awaiting_answer().is_ok()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.ensure_answered().is_ok()
    }

    #[must_use]
    pub fn world_map_status(&self) -> WorldMapStatus {
        view::world_map_status(&self.catalog, &self.state)
    }

    #[must_use]
    pub fn level_progress(&self) -> LevelProgress {
        view::level_progress(&self.rules, &self.state)
    }

    #[must_use]
    pub fn phase_progress(&self) -> PhaseProgress {
        view::phase_progress(&self.catalog, &self.state)
    }

    #[must_use]
    pub fn final_report(&self) -> FinalReport {
        view::final_report(&self.catalog, &self.rules, &self.state)
    }

    fn review_item_index(&self) -> Option<usize> {
        let review = self.state.review?;
        self.state
            .wrong_answers
            .for_phase(review.phase)
            .get(review.cursor)
            .copied()
    }
}

impl fmt::Debug for ProgressionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressionEngine")
            .field("lessons_len", &self.catalog.total_lessons())
            .field("rules", &self.rules)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
