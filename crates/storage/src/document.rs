//! JSON shape of the progress slot.
//!
//! Keys stay camelCase (`completedTopics`, `activeModuleId`, `dailyStreak`,
//! `lastActive`) so a slot written by any earlier build still parses. There
//! is no version field; a payload that does not match is rejected.

use chrono::{DateTime, Utc};
use pathway_core::model::{ModuleId, ProgressRecord};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProgressDocument {
    completed_topics: Vec<String>,
    active_module_id: Option<ModuleId>,
    daily_streak: u32,
    last_active: DateTime<Utc>,
}

/// Serialize a record for the durable slot.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_progress(record: &ProgressRecord) -> Result<String, StorageError> {
    let doc = ProgressDocument {
        completed_topics: record.completed_topics().to_vec(),
        active_module_id: record.active_module_id().cloned(),
        daily_streak: record.daily_streak(),
        last_active: record.last_active(),
    };
    serde_json::to_string(&doc).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse a slot payload back into a record.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or a payload
/// that does not match the record shape.
pub fn decode_progress(raw: &str) -> Result<ProgressRecord, StorageError> {
    let doc: ProgressDocument =
        serde_json::from_str(raw).map_err(|err| StorageError::Serialization(err.to_string()))?;
    Ok(ProgressRecord::from_persisted(
        doc.completed_topics,
        doc.active_module_id,
        doc.daily_streak,
        doc.last_active,
    ))
}
