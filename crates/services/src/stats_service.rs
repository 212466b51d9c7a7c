use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use storage::repository::{TrainingSessionRepository, TrainingSessionRow};
use trainer_core::model::{Difficulty, TimeLimit, TrainingSessionId, TrainingStats};

use crate::error::StatsError;

/// Recent sessions shown when no limit is given.
pub const DEFAULT_RECENT_LIMIT: u32 = 5;

/// Presentation-agnostic list item for one stored session.
///
/// No pre-formatted strings; the UI and CLI format as they need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionListItem {
    pub id: TrainingSessionId,
    pub difficulty: Difficulty,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub time_limit: TimeLimit,
    pub accuracy: f64,
    pub created_at: DateTime<Utc>,
}

impl SessionListItem {
    #[must_use]
    pub fn from_row(row: &TrainingSessionRow) -> Self {
        let record = &row.record;
        Self {
            id: row.id,
            difficulty: record.difficulty(),
            total_questions: record.total_questions(),
            correct_answers: record.correct_answers(),
            time_limit: record.time_limit(),
            accuracy: record.accuracy(),
            created_at: record.created_at(),
        }
    }
}

/// Overall statistics plus the latest sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsOverview {
    pub stats: TrainingStats,
    pub accuracy: f64,
    pub recent: Vec<SessionListItem>,
}

/// Read-only facade over stored training sessions.
#[derive(Clone)]
pub struct StatsService {
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl StatsService {
    #[must_use]
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self { sessions }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(storage::repository::InMemoryRepository::new()))
    }

    /// Aggregate totals across all sessions.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` on repository failures.
    pub async fn overall(&self) -> Result<TrainingStats, StatsError> {
        Ok(self.sessions.aggregate_stats().await?)
    }

    /// Newest sessions first.
    ///
    /// # Errors
    ///
    /// Returns `StatsError::Storage` on repository failures.
    pub async fn recent_sessions(&self, limit: u32) -> Result<Vec<SessionListItem>, StatsError> {
        let rows = self.sessions.list_recent_sessions(limit).await?;
        Ok(rows.iter().map(SessionListItem::from_row).collect())
    }

    /// # Errors
    ///
    /// Returns `StatsError::Storage` on repository failures.
    pub async fn overview(&self, limit: u32) -> Result<StatsOverview, StatsError> {
        let stats = self.overall().await?;
        let recent = self.recent_sessions(limit).await?;
        Ok(StatsOverview {
            stats,
            accuracy: stats.accuracy(),
            recent,
        })
    }
}
