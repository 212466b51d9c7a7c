//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use trainer_core::model::TrainingRecordError;

/// Errors emitted by the training state machine and loop service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrainingError {
    #[error("no question is awaiting an answer")]
    NotAwaitingAnswer,
    #[error("no answer feedback is pending")]
    NoFeedbackPending,
    #[error("training session already ended")]
    Ended,
    #[error(transparent)]
    Record(#[from] TrainingRecordError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors reported by a `Speaker` backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SpeechError {
    #[error("speech output is unavailable")]
    Unavailable,
    #[error("speech failed: {0}")]
    Failed(String),
}

/// Errors emitted by `StatsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StatsError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AppSettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppSettingsServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
