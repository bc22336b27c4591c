use async_trait::async_trait;
use pathway_core::model::ProgressRecord;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::document::{decode_progress, encode_progress};

/// Name of the durable slot that holds the progress record.
pub const PROGRESS_SLOT: &str = "ot_pathway_progress";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable home of the single per-device progress record.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Read the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` when the slot holds data that
    /// does not parse, or `StorageError::Connection` if the backend fails.
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError>;

    /// Overwrite the stored record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be encoded or stored.
    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository for tests and prototyping.
///
/// Slots hold the same JSON text the `SQLite` backend stores, so tests can
/// plant raw (even corrupt) payloads.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw text into a slot, bypassing encoding.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, slot: &str, payload: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(slot.to_owned(), payload.into());
        Ok(())
    }

    /// Raw text of a slot, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn get_raw(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(slot).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError> {
        self.get_raw(PROGRESS_SLOT)?
            .map(|raw| decode_progress(&raw))
            .transpose()
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let payload = encode_progress(record)?;
        self.put_raw(PROGRESS_SLOT, payload)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryRepository::new())
    }

    /// Wrap an existing in-memory repository, keeping a handle for raw access.
    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathway_core::model::{Catalog, ModuleId};
    use pathway_core::time::fixed_now;

    #[tokio::test]
    async fn empty_slot_loads_none() {
        let repo = InMemoryRepository::new();
        assert!(repo.load_progress().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn round_trips_record() {
        let repo = InMemoryRepository::new();
        let record = ProgressRecord::fresh(&Catalog::builtin(), fixed_now())
            .toggle_topic("Goniometry Lab")
            .with_active_module(ModuleId::new("y1-m2"));
        repo.save_progress(&record).await.unwrap();

        let loaded = repo.load_progress().await.unwrap().expect("stored");
        assert_eq!(loaded, record);
        assert_eq!(loaded.completed_topics(), record.completed_topics());
    }

    #[tokio::test]
    async fn save_overwrites_previous_payload() {
        let repo = InMemoryRepository::new();
        let first = ProgressRecord::fresh(&Catalog::builtin(), fixed_now());
        repo.save_progress(&first).await.unwrap();
        let second = first.toggle_topic("A");
        repo.save_progress(&second).await.unwrap();

        let loaded = repo.load_progress().await.unwrap().unwrap();
        assert_eq!(loaded.completed_topics(), ["A"]);
    }

    #[tokio::test]
    async fn corrupt_slot_is_a_serialization_error() {
        let repo = InMemoryRepository::new();
        repo.put_raw(PROGRESS_SLOT, "{oops").unwrap();
        assert!(matches!(
            repo.load_progress().await,
            Err(StorageError::Serialization(_))
        ));
    }
}
