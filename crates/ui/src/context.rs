use std::sync::Arc;
use std::time::Duration;

use services::AssessmentService;

pub trait UiApp: Send + Sync {
    fn title(&self) -> String;

    fn assessment(&self) -> Arc<AssessmentService>;
}

#[derive(Clone)]
pub struct AppContext {
    title: String,
    assessment: Arc<AssessmentService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            title: app.title(),
            assessment: app.assessment(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    /// Redraw tick used while the reaction trial waits for its "go" instant.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.assessment.settings().poll_interval_ms())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
