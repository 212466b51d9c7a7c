use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use trainer_core::model::{AppSettings, TrainingSessionId, TrainingSessionRecord, TrainingStats};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A stored training session together with its row id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSessionRow {
    pub id: TrainingSessionId,
    pub record: TrainingSessionRecord,
}

impl TrainingSessionRow {
    #[must_use]
    pub fn new(id: TrainingSessionId, record: TrainingSessionRecord) -> Self {
        Self { id, record }
    }
}

/// Append-only store of finished training sessions.
#[async_trait]
pub trait TrainingSessionRepository: Send + Sync {
    /// Persist a finished session and return its id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn append_session(
        &self,
        record: &TrainingSessionRecord,
    ) -> Result<TrainingSessionId, StorageError>;

    /// Fetch a session by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_session(&self, id: TrainingSessionId)
    -> Result<TrainingSessionRecord, StorageError>;

    /// Most recent sessions first, at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query or mapping failures.
    async fn list_recent_sessions(&self, limit: u32)
    -> Result<Vec<TrainingSessionRow>, StorageError>;

    /// Aggregate totals over every stored session.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query failures.
    async fn aggregate_stats(&self) -> Result<TrainingStats, StorageError>;
}

#[async_trait]
pub trait AppSettingsRepository: Send + Sync {
    /// Load stored settings, `None` when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on query or mapping failures.
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError>;

    /// Persist settings, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails.
    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    sessions: Arc<Mutex<Vec<TrainingSessionRecord>>>,
    settings: Arc<Mutex<Option<AppSettings>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn row_id(index: usize) -> Result<TrainingSessionId, StorageError> {
    i64::try_from(index + 1)
        .map(TrainingSessionId::new)
        .map_err(|_| StorageError::Serialization("session id overflow".into()))
}

#[async_trait]
impl TrainingSessionRepository for InMemoryRepository {
    async fn append_session(
        &self,
        record: &TrainingSessionRecord,
    ) -> Result<TrainingSessionId, StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(record.clone());
        row_id(guard.len() - 1)
    }

    async fn get_session(
        &self,
        id: TrainingSessionId,
    ) -> Result<TrainingSessionRecord, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        usize::try_from(id.value() - 1)
            .ok()
            .and_then(|index| guard.get(index))
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn list_recent_sessions(
        &self,
        limit: u32,
    ) -> Result<Vec<TrainingSessionRow>, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut rows = guard
            .iter()
            .enumerate()
            .map(|(index, record)| Ok(TrainingSessionRow::new(row_id(index)?, record.clone())))
            .collect::<Result<Vec<_>, StorageError>>()?;
        rows.sort_by(|a, b| {
            b.record
                .created_at()
                .cmp(&a.record.created_at())
                .then_with(|| b.id.cmp(&a.id))
        });
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(rows)
    }

    async fn aggregate_stats(&self) -> Result<TrainingStats, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.iter().fold(TrainingStats::default(), |acc, record| {
            acc.with_session(record.total_questions(), record.correct_answers())
        }))
    }
}

#[async_trait]
impl AppSettingsRepository for InMemoryRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(*guard)
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        let mut guard = self
            .settings
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = Some(*settings);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn TrainingSessionRepository>,
    pub settings: Arc<dyn AppSettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let sessions: Arc<dyn TrainingSessionRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn AppSettingsRepository> = Arc::new(repo);
        Self { sessions, settings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use trainer_core::model::{Difficulty, ThemeMode, TimeLimit};
    use trainer_core::time::fixed_now;

    fn record(difficulty: Difficulty, total: u32, correct: u32, minutes: i64) -> TrainingSessionRecord {
        TrainingSessionRecord::new(
            difficulty,
            total,
            correct,
            TimeLimit::default(),
            fixed_now() + Duration::minutes(minutes),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn aggregates_example_sessions() {
        let repo = InMemoryRepository::new();
        repo.append_session(&record(Difficulty::Easy, 10, 8, 0)).await.unwrap();
        repo.append_session(&record(Difficulty::Medium, 15, 12, 1)).await.unwrap();
        repo.append_session(&record(Difficulty::Hard, 20, 18, 2)).await.unwrap();
        repo.append_session(&record(Difficulty::Custom, 12, 10, 3)).await.unwrap();

        let stats = repo.aggregate_stats().await.unwrap();
        assert_eq!(stats.sessions, 4);
        assert_eq!(stats.total_questions, 57);
        assert_eq!(stats.correct_answers, 48);
    }

    #[tokio::test]
    async fn recent_sessions_are_newest_first_and_limited() {
        let repo = InMemoryRepository::new();
        let first = repo.append_session(&record(Difficulty::Easy, 5, 5, 0)).await.unwrap();
        let second = repo.append_session(&record(Difficulty::Hard, 5, 1, 10)).await.unwrap();
        let third = repo.append_session(&record(Difficulty::Medium, 5, 3, 5)).await.unwrap();

        let rows = repo.list_recent_sessions(2).await.unwrap();
        let ids: Vec<_> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![second, third]);
        assert_ne!(ids[0], first);

        assert_eq!(repo.get_session(first).await.unwrap().difficulty(), Difficulty::Easy);
        assert!(matches!(
            repo.get_session(TrainingSessionId::new(99)).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn settings_start_empty_and_round_trip() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.get_settings().await.unwrap(), None);

        let settings = AppSettings::new(true, ThemeMode::Dark);
        repo.save_settings(&settings).await.unwrap();
        assert_eq!(repo.get_settings().await.unwrap(), Some(settings));
    }
}
