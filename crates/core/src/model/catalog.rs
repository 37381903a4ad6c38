use std::ops::Range;

use thiserror::Error;

use crate::model::ids::PhaseId;
use crate::model::lesson::Lesson;
use crate::model::phase::Phase;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no lessons")]
    Empty,

    #[error("catalog has no phases")]
    NoPhases,

    #[error("phase {id} is listed more than once")]
    DuplicatePhase { id: PhaseId },

    #[error("phase {id} is listed after phase {previous}")]
    PhasesOutOfOrder { previous: PhaseId, id: PhaseId },

    #[error("lesson {index} references unknown phase {phase}")]
    UnknownPhase { index: usize, phase: PhaseId },

    #[error("lesson {index} of phase {phase} follows a lesson of phase {previous}")]
    LessonsOutOfOrder {
        index: usize,
        phase: PhaseId,
        previous: PhaseId,
    },
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// Immutable, ordered set of lessons grouped into phases.
///
/// All lessons of a phase are contiguous and phases appear in ascending id
/// order, so every phase owns a single index range of the lesson sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonCatalog {
    phases: Vec<Phase>,
    lessons: Vec<Lesson>,
    // Parallel to `phases`.
    ranges: Vec<Range<usize>>,
}

impl LessonCatalog {
    /// Build a catalog from validated phases and lessons.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when either list is empty, phases are not in
    /// strictly ascending id order, a lesson points at an unknown phase, or the
    /// lessons of a phase are not contiguous.
    pub fn new(phases: Vec<Phase>, lessons: Vec<Lesson>) -> Result<Self, CatalogError> {
        if lessons.is_empty() {
            return Err(CatalogError::Empty);
        }
        if phases.is_empty() {
            return Err(CatalogError::NoPhases);
        }

        for pair in phases.windows(2) {
            let (previous, id) = (pair[0].id(), pair[1].id());
            if previous == id {
                return Err(CatalogError::DuplicatePhase { id });
            }
            if previous > id {
                return Err(CatalogError::PhasesOutOfOrder { previous, id });
            }
        }

        let mut ranges = vec![0..0; phases.len()];
        let mut previous: Option<PhaseId> = None;
        for (index, lesson) in lessons.iter().enumerate() {
            let phase = lesson.phase();
            let Ok(position) = phases.binary_search_by_key(&phase, Phase::id) else {
                return Err(CatalogError::UnknownPhase { index, phase });
            };
            if let Some(previous) = previous.filter(|previous| *previous > phase) {
                return Err(CatalogError::LessonsOutOfOrder {
                    index,
                    phase,
                    previous,
                });
            }

            let range = &mut ranges[position];
            if range.is_empty() {
                *range = index..index + 1;
            } else {
                range.end = index + 1;
            }
            previous = Some(phase);
        }

        // Empty phases sit at the boundary where they would have started.
        let mut cursor = 0;
        for range in &mut ranges {
            if range.is_empty() {
                *range = cursor..cursor;
            } else {
                cursor = range.end;
            }
        }

        Ok(Self {
            phases,
            lessons,
            ranges,
        })
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    #[must_use]
    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    #[must_use]
    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.position(id).map(|pos| &self.phases[pos])
    }

    /// Total number of lessons. Never zero.
    #[must_use]
    pub fn total_lessons(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn first_phase(&self) -> &Phase {
        &self.phases[0]
    }

    /// Phase owning the lesson at `index`.
    #[must_use]
    pub fn phase_of(&self, index: usize) -> Option<&Phase> {
        self.lesson(index).and_then(|lesson| self.phase(lesson.phase()))
    }

    /// Index range of the lessons that belong to phase `id`.
    ///
    /// Unknown phases yield an empty range.
    #[must_use]
    pub fn lessons_in_phase(&self, id: PhaseId) -> Range<usize> {
        self.position(id)
            .map_or(0..0, |pos| self.ranges[pos].clone())
    }

    /// Number of lessons in all phases with an id lower than `id`.
    #[must_use]
    pub fn lessons_before_phase(&self, id: PhaseId) -> usize {
        self.phases
            .iter()
            .zip(&self.ranges)
            .take_while(|(phase, _)| phase.id() < id)
            .map(|(_, range)| range.len())
            .sum()
    }

    #[must_use]
    pub fn is_last_lesson(&self, index: usize) -> bool {
        index + 1 >= self.lessons.len()
    }

    fn position(&self, id: PhaseId) -> Option<usize> {
        self.phases.binary_search_by_key(&id, Phase::id).ok()
    }
}
