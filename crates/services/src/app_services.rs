use std::sync::Arc;

use pathway_core::model::Catalog;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::explanation::ExplanationService;
use crate::progress_service::ProgressService;

/// Assembles app-facing services around one catalog.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<Catalog>,
    progress: Arc<ProgressService>,
    explanations: Arc<ExplanationService>,
}

impl AppServices {
    #[must_use]
    pub fn new(
        storage: &Storage,
        clock: Clock,
        catalog: Arc<Catalog>,
        explanations: ExplanationService,
    ) -> Self {
        let progress = Arc::new(ProgressService::new(
            clock,
            Arc::clone(&catalog),
            Arc::clone(&storage.progress),
        ));
        Self {
            catalog,
            progress,
            explanations: Arc::new(explanations),
        }
    }

    /// Build services backed by `SQLite` storage, the built-in catalog and
    /// AI settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::new(
            &storage,
            clock,
            Arc::new(Catalog::builtin()),
            ExplanationService::from_env(),
        ))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn explanations(&self) -> Arc<ExplanationService> {
        Arc::clone(&self.explanations)
    }
}
