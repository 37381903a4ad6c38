use serde::{Deserialize, Serialize};
use tracing::debug;

use quest_core::model::{LessonCatalog, LessonDraft, PhaseDraft};

use crate::error::ContentError;

/// On-disk shape of a lesson catalog.
///
/// Mirrors the domain catalog so files can be read without leaking the JSON
/// layout into `quest-core`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogRecord {
    pub phases: Vec<PhaseDraft>,
    pub lessons: Vec<LessonDraft>,
}

impl CatalogRecord {
    /// Validate every phase and lesson, then assemble the catalog.
    ///
    /// # Errors
    ///
    /// Returns `quest_core::Error` for the first invalid phase or lesson, or
    /// when the catalog ordering rules are broken.
    pub fn into_catalog(self) -> Result<LessonCatalog, quest_core::Error> {
        let phases = self
            .phases
            .into_iter()
            .map(PhaseDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        let lessons = self
            .lessons
            .into_iter()
            .map(LessonDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LessonCatalog::new(phases, lessons)?)
    }
}

/// Parse and validate a catalog from JSON text.
///
/// # Errors
///
/// Returns `ContentError::Json` for malformed input and
/// `ContentError::Invalid` when the content breaks catalog rules.
pub fn parse_catalog(json: &str) -> Result<LessonCatalog, ContentError> {
    let record: CatalogRecord = serde_json::from_str(json)?;
    debug!(
        phases = record.phases.len(),
        lessons = record.lessons.len(),
        "parsed catalog record"
    );
    Ok(record.into_catalog()?)
}
