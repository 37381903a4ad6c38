use std::sync::Arc;

use quest_core::model::{LessonCatalog, ProgressionRules};
use services::ProgressionEngine;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<LessonCatalog>;
    fn rules(&self) -> ProgressionRules;

    /// Window and header title.
    fn title(&self) -> String {
        "CodeSharp Quest".to_string()
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<LessonCatalog>,
    rules: ProgressionRules,
    title: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            rules: app.rules(),
            title: app.title(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn rules(&self) -> ProgressionRules {
        self.rules
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// A fresh session over the shared catalog.
    #[must_use]
    pub fn new_engine(&self) -> ProgressionEngine {
        ProgressionEngine::new(self.catalog()).with_rules(self.rules)
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
