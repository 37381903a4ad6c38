use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use quest_core::model::PhaseId;

//
// ─── WRONG ANSWERS ─────────────────────────────────────────────────────────────
//

/// Lessons answered wrong and not yet remediated, keyed by lesson index.
///
/// Iteration is always in ascending lesson order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrongAnswers {
    entries: BTreeMap<usize, PhaseId>,
}

impl WrongAnswers {
    /// Returns true if the lesson was not recorded before.
    pub(crate) fn record(&mut self, lesson_index: usize, phase: PhaseId) -> bool {
        match self.entries.entry(lesson_index) {
            Entry::Vacant(slot) => {
                slot.insert(phase);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns true if the lesson was present.
    pub(crate) fn resolve(&mut self, lesson_index: usize) -> bool {
        self.entries.remove(&lesson_index).is_some()
    }

    #[must_use]
    pub fn contains(&self, lesson_index: usize) -> bool {
        self.entries.contains_key(&lesson_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lesson indices of `phase`, ascending.
    #[must_use]
    pub fn for_phase(&self, phase: PhaseId) -> Vec<usize> {
        self.entries
            .iter()
            .filter(|(_, owner)| **owner == phase)
            .map(|(index, _)| *index)
            .collect()
    }

    #[must_use]
    pub fn count_for_phase(&self, phase: PhaseId) -> usize {
        self.entries.values().filter(|owner| **owner == phase).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, PhaseId)> + '_ {
        self.entries.iter().map(|(index, phase)| (*index, *phase))
    }
}

//
// ─── REVIEW ────────────────────────────────────────────────────────────────────
//

/// Remediation loop over the wrong answers of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewState {
    pub(crate) phase: PhaseId,
    pub(crate) cursor: usize,
}

impl ReviewState {
    #[must_use]
    pub fn phase(&self) -> PhaseId {
        self.phase
    }

    /// Position within the phase's wrong-answer queue.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// The answer given to the question currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedAnswer {
    pub lesson_index: usize,
    pub selected: usize,
    pub is_correct: bool,
}

//
// ─── SCREEN ────────────────────────────────────────────────────────────────────
//

/// State-machine position, as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Lesson,
    PhaseTransitionPending,
    Review,
    Complete,
}

//
// ─── PROGRESS STATE ────────────────────────────────────────────────────────────
//

/// Mutable session progress. Only `ProgressionEngine` writes to it.
///
/// `ProgressState::default()` is the state of a fresh session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub(crate) current_lesson_index: usize,
    pub(crate) xp: u32,
    pub(crate) correct_answer_count: u32,
    pub(crate) wrong_answers: WrongAnswers,
    pub(crate) review: Option<ReviewState>,
    pub(crate) game_complete: bool,
    pub(crate) pending_phase_transition: Option<PhaseId>,
    pub(crate) answer: Option<SubmittedAnswer>,
    pub(crate) streak: u32,
    pub(crate) best_streak: u32,
}

impl ProgressState {
    #[must_use]
    pub fn current_lesson_index(&self) -> usize {
        self.current_lesson_index
    }

    #[must_use]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    #[must_use]
    pub fn correct_answer_count(&self) -> u32 {
        self.correct_answer_count
    }

    #[must_use]
    pub fn wrong_answers(&self) -> &WrongAnswers {
        &self.wrong_answers
    }

    #[must_use]
    pub fn review(&self) -> Option<&ReviewState> {
        self.review.as_ref()
    }

    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.game_complete
    }

    #[must_use]
    pub fn pending_phase_transition(&self) -> Option<PhaseId> {
        self.pending_phase_transition
    }

    #[must_use]
    pub fn answer(&self) -> Option<SubmittedAnswer> {
        self.answer
    }

    /// Consecutive correct answers.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// A transition scheduled during review waits behind the review screen.
    #[must_use]
    pub fn screen(&self) -> Screen {
        if self.game_complete {
            Screen::Complete
        } else if self.review.is_some() {
            Screen::Review
        } else if self.pending_phase_transition.is_some() {
            Screen::PhaseTransitionPending
        } else {
            Screen::Lesson
        }
    }
}
