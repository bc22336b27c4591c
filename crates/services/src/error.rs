//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors from the text-generation client. Never reach the view: the
/// explanation service turns them into fallback copy.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("text generation is not configured")]
    Disabled,
    #[error("text generation returned an empty response")]
    EmptyResponse,
    #[error("text generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `ProgressService::save`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
