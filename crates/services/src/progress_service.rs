use std::sync::Arc;

use pathway_core::model::{Catalog, ModuleId, ProgressRecord};
use storage::repository::{ProgressRepository, StorageError};
use tracing::{debug, warn};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Single writer for the durable progress record.
///
/// Views hold the current `ProgressRecord` and hand it back here for every
/// change; each change is written through to storage immediately.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    catalog: Arc<Catalog>,
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>, repo: Arc<dyn ProgressRepository>) -> Self {
        Self {
            clock,
            catalog,
            repo,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load the stored record, or start a fresh one.
    ///
    /// A missing or malformed slot yields a fresh record that is written
    /// back so the slot is well-formed afterwards. Any other read failure
    /// yields a fresh record in memory only; the stored record is left alone.
    pub async fn load(&self) -> ProgressRecord {
        let repair = match self.repo.load_progress().await {
            Ok(Some(record)) => return record,
            Ok(None) => {
                debug!("no stored progress, starting fresh");
                true
            }
            Err(err @ StorageError::Serialization(_)) => {
                warn!(error = %err, "stored progress is malformed, starting fresh");
                true
            }
            Err(err) => {
                warn!(error = %err, "could not read stored progress, starting fresh without saving");
                false
            }
        };

        let fresh = ProgressRecord::fresh(&self.catalog, self.clock.now());
        if repair && let Err(err) = self.save(&fresh).await {
            warn!(error = %err, "could not persist fresh progress record");
        }
        fresh
    }

    /// Overwrite the durable slot with `record`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the write fails.
    pub async fn save(&self, record: &ProgressRecord) -> Result<(), ProgressServiceError> {
        self.repo.save_progress(record).await?;
        Ok(())
    }

    /// Flip a topic's completion and persist the result.
    ///
    /// The new record is returned even if the write fails (the failure is
    /// logged) so the view always reflects what the student clicked.
    pub async fn toggle_topic(&self, record: &ProgressRecord, topic: &str) -> ProgressRecord {
        let next = record.toggle_topic(topic).touched(self.clock.now());
        self.persist(&next).await;
        next
    }

    /// Remember the selected module. Ids outside the catalog are ignored.
    pub async fn select_module(&self, record: &ProgressRecord, id: &ModuleId) -> ProgressRecord {
        if !self.catalog.contains(id.as_str()) {
            warn!(module_id = %id, "ignoring selection of unknown module");
            return record.clone();
        }
        if record.active_module_id() == Some(id) {
            return record.clone();
        }
        let next = record
            .with_active_module(id.clone())
            .touched(self.clock.now());
        self.persist(&next).await;
        next
    }

    async fn persist(&self, record: &ProgressRecord) {
        if let Err(err) = self.save(record).await {
            warn!(error = %err, "could not persist progress");
        }
    }
}
