mod catalog;
mod ids;
mod lesson;
mod phase;
mod rules;

pub use ids::{ParseIdError, PhaseId};

pub use catalog::{CatalogError, LessonCatalog};
pub use lesson::{Lesson, LessonDraft, LessonError};
pub use phase::{Phase, PhaseDraft, PhaseError};
pub use rules::{ProgressionRules, RulesError};
