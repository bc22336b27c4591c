use async_trait::async_trait;
use chrono::Utc;
use pathway_core::model::ProgressRecord;
use sqlx::Row;

use crate::document::{decode_progress, encode_progress};
use crate::repository::{PROGRESS_SLOT, ProgressRepository, StorageError};

use super::SqliteRepository;

impl SqliteRepository {
    /// Raw text stored under `slot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails.
    pub async fn read_slot(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM storage_slots WHERE key = ?1")
            .bind(slot)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let value: String = row
            .try_get("value")
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        Ok(Some(value))
    }

    /// Replace the text stored under `slot`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the upsert fails.
    pub async fn write_slot(&self, slot: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO storage_slots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(slot)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_progress(&self) -> Result<Option<ProgressRecord>, StorageError> {
        self.read_slot(PROGRESS_SLOT)
            .await?
            .map(|raw| decode_progress(&raw))
            .transpose()
    }

    async fn save_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let payload = encode_progress(record)?;
        self.write_slot(PROGRESS_SLOT, &payload).await
    }
}
