use std::sync::Arc;

use pathway_core::model::Catalog;
use pathway_core::timer::TimerDurations;
use services::{ExplanationFeed, ExplanationService, ProgressService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn progress(&self) -> Arc<ProgressService>;
    fn explanations(&self) -> Arc<ExplanationService>;

    fn timer_durations(&self) -> TimerDurations {
        TimerDurations::default()
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
    explanations: ExplanationFeed,
    timer_durations: TimerDurations,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            progress: app.progress(),
            explanations: ExplanationFeed::new(app.explanations()),
            timer_durations: app.timer_durations(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    /// Shared latest-wins front over the explanation service.
    #[must_use]
    pub fn explanations(&self) -> ExplanationFeed {
        self.explanations.clone()
    }

    #[must_use]
    pub fn timer_durations(&self) -> TimerDurations {
        self.timer_durations
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
