use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::PhaseId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PhaseError {
    #[error("phase {id} has an empty name")]
    EmptyName { id: PhaseId },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated phase as it appears in catalog files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseDraft {
    pub id: PhaseId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl PhaseDraft {
    /// Validate the draft into a `Phase`.
    ///
    /// # Errors
    ///
    /// Returns `PhaseError::EmptyName` if the name is blank.
    pub fn validate(self) -> Result<Phase, PhaseError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PhaseError::EmptyName { id: self.id });
        }

        Ok(Phase {
            id: self.id,
            name: name.to_string(),
            description: self.description.trim().to_string(),
            icon: self.icon.trim().to_string(),
        })
    }
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// A themed group of consecutive lessons that shares a gating boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phase {
    id: PhaseId,
    name: String,
    description: String,
    icon: String,
}

impl Phase {
    #[must_use]
    pub fn id(&self) -> PhaseId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// Last word of the name, used where space is tight (map nodes).
    #[must_use]
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }
}
