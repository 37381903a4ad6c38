//! Read-only projections of progress for a presentation layer.
//!
//! Everything here is a pure function of the catalog, the rules and the
//! current `ProgressState`.

use quest_core::model::{LessonCatalog, PhaseId, ProgressionRules};

use super::state::ProgressState;

//
// ─── WORLD MAP ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStatus {
    Locked,
    Current,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldMapEntry {
    pub phase: PhaseId,
    pub status: PhaseStatus,
    pub completed: usize,
    pub total: usize,
}

impl WorldMapEntry {
    #[must_use]
    pub fn percent(&self) -> u32 {
        percent(self.completed, self.total)
    }
}

/// Per-phase status, in phase order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMapStatus {
    pub entries: Vec<WorldMapEntry>,
    pub completed_lessons: usize,
    pub total_lessons: usize,
}

/// Lessons behind the player: every lesson before the current one, or all of
/// them once the quest is complete.
pub(crate) fn completed_lessons(catalog: &LessonCatalog, state: &ProgressState) -> usize {
    if state.game_complete {
        catalog.total_lessons()
    } else {
        state.current_lesson_index
    }
}

pub(crate) fn world_map_status(catalog: &LessonCatalog, state: &ProgressState) -> WorldMapStatus {
    let completed_lessons = completed_lessons(catalog, state);
    let current_phase = catalog
        .lesson(state.current_lesson_index)
        .map(|lesson| lesson.phase());

    let entries = catalog
        .phases()
        .iter()
        .map(|phase| {
            let id = phase.id();
            let status = if state.game_complete {
                PhaseStatus::Completed
            } else {
                match current_phase.map(|current| current.cmp(&id)) {
                    Some(std::cmp::Ordering::Less) | None => PhaseStatus::Locked,
                    Some(std::cmp::Ordering::Equal) => PhaseStatus::Current,
                    Some(std::cmp::Ordering::Greater) => PhaseStatus::Completed,
                }
            };
            let total = catalog.lessons_in_phase(id).len();
            let completed = completed_lessons
                .saturating_sub(catalog.lessons_before_phase(id))
                .min(total);

            WorldMapEntry {
                phase: id,
                status,
                completed,
                total,
            }
        })
        .collect();

    WorldMapStatus {
        entries,
        completed_lessons,
        total_lessons: catalog.total_lessons(),
    }
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// XP bar contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub xp: u32,
    pub xp_into_level: u32,
    pub xp_per_level: u32,
    pub percent: u32,
}

pub(crate) fn level_progress(rules: &ProgressionRules, state: &ProgressState) -> LevelProgress {
    let into = rules.xp_into_level(state.xp);
    LevelProgress {
        level: rules.level_for(state.xp),
        xp: state.xp,
        xp_into_level: into,
        xp_per_level: rules.xp_per_level(),
        percent: percent(into as usize, rules.xp_per_level() as usize),
    }
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Position inside the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseProgress {
    pub phase: PhaseId,
    /// 1-based position of the current lesson within its phase.
    pub lesson_in_phase: usize,
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

pub(crate) fn phase_progress(catalog: &LessonCatalog, state: &ProgressState) -> PhaseProgress {
    let phase = catalog
        .lesson(state.current_lesson_index)
        .map_or_else(|| catalog.first_phase().id(), |lesson| lesson.phase());
    let before = catalog.lessons_before_phase(phase);
    let total = catalog.lessons_in_phase(phase).len();
    let offset = state.current_lesson_index.saturating_sub(before);
    let completed = completed_lessons(catalog, state)
        .saturating_sub(before)
        .min(total);

    PhaseProgress {
        phase,
        lesson_in_phase: (offset + 1).min(total.max(1)),
        completed,
        total,
        percent: percent(completed, total),
    }
}

//
// ─── FINAL REPORT ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    /// 80% or more.
    Legend,
    /// 60% or more.
    Adept,
    Novice,
}

impl Rank {
    #[must_use]
    pub fn for_percent(percent: u32) -> Self {
        if percent >= 80 {
            Rank::Legend
        } else if percent >= 60 {
            Rank::Adept
        } else {
            Rank::Novice
        }
    }
}

/// Numbers shown on the victory screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalReport {
    pub xp: u32,
    pub level: u32,
    pub correct_answers: u32,
    pub total_questions: usize,
    /// Correct answers over questions, rounded, capped at 100.
    pub percent: u32,
    pub rank: Rank,
    pub best_streak: u32,
}

pub(crate) fn final_report(
    catalog: &LessonCatalog,
    rules: &ProgressionRules,
    state: &ProgressState,
) -> FinalReport {
    let total = catalog.total_lessons();
    let pct = percent(state.correct_answer_count as usize, total).min(100);
    FinalReport {
        xp: state.xp,
        level: rules.level_for(state.xp),
        correct_answers: state.correct_answer_count,
        total_questions: total,
        percent: pct,
        rank: Rank::for_percent(pct),
        best_streak: state.best_streak,
    }
}

/// `part / whole` as a percentage rounded half up; 0 when `whole` is 0.
#[must_use]
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let rounded = (part.saturating_mul(200) + whole) / whole.saturating_mul(2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
