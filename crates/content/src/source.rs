use std::path::{Path, PathBuf};

use tracing::info;

use quest_core::model::LessonCatalog;

use crate::error::ContentError;
use crate::record::parse_catalog;

const BUNDLED_JSON: &str = include_str!("../data/csharp_quest.json");

/// Anything that can produce a validated lesson catalog.
pub trait CatalogSource {
    /// Load and validate the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the catalog cannot be read or is invalid.
    fn load(&self) -> Result<LessonCatalog, ContentError>;

    /// Human readable origin, for logs and diagnostics.
    fn describe(&self) -> String;
}

/// The C# quest shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCatalog;

impl BundledCatalog {
    /// Raw JSON of the bundled catalog.
    #[must_use]
    pub fn json() -> &'static str {
        BUNDLED_JSON
    }
}

impl CatalogSource for BundledCatalog {
    fn load(&self) -> Result<LessonCatalog, ContentError> {
        let catalog = parse_catalog(BUNDLED_JSON)?;
        info!(lessons = catalog.total_lessons(), "loaded bundled catalog");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        "bundled C# quest".to_string()
    }
}

/// A catalog stored as JSON on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<LessonCatalog, ContentError> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| ContentError::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = parse_catalog(&json)?;
        info!(
            path = %self.path.display(),
            lessons = catalog.total_lessons(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
