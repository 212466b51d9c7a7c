use sqlx::Row;
use trainer_core::model::{TrainingSessionId, TrainingSessionRecord, TrainingStats};

use super::SqliteRepository;
use super::mapping::{map_session_row, ser};
use crate::repository::{StorageError, TrainingSessionRepository, TrainingSessionRow};

fn u64_from_i64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

#[async_trait::async_trait]
impl TrainingSessionRepository for SqliteRepository {
    async fn append_session(
        &self,
        record: &TrainingSessionRecord,
    ) -> Result<TrainingSessionId, StorageError> {
        let res = sqlx::query(
            r"
                INSERT INTO training_sessions (
                    difficulty, total_questions, correct_answers, time_per_question, date
                )
                VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(record.difficulty().label())
        .bind(i64::from(record.total_questions()))
        .bind(i64::from(record.correct_answers()))
        .bind(i64::from(record.time_limit().as_secs()))
        .bind(record.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(TrainingSessionId::new(res.last_insert_rowid()))
    }

    async fn get_session(
        &self,
        id: TrainingSessionId,
    ) -> Result<TrainingSessionRecord, StorageError> {
        let row = sqlx::query(
            r"
                SELECT id, difficulty, total_questions, correct_answers, time_per_question, date
                FROM training_sessions
                WHERE id = ?1
            ",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .ok_or(StorageError::NotFound)?;

        map_session_row(&row).map(|row| row.record)
    }

    async fn list_recent_sessions(
        &self,
        limit: u32,
    ) -> Result<Vec<TrainingSessionRow>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT id, difficulty, total_questions, correct_answers, time_per_question, date
                FROM training_sessions
                ORDER BY date DESC, id DESC
                LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        rows.iter().map(map_session_row).collect()
    }

    async fn aggregate_stats(&self) -> Result<TrainingStats, StorageError> {
        let row = sqlx::query(
            r"
                SELECT
                    COUNT(*) AS sessions,
                    COALESCE(SUM(total_questions), 0) AS total_questions,
                    COALESCE(SUM(correct_answers), 0) AS correct_answers
                FROM training_sessions
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(TrainingStats {
            sessions: u64_from_i64("sessions", row.try_get("sessions").map_err(ser)?)?,
            total_questions: u64_from_i64(
                "total_questions",
                row.try_get("total_questions").map_err(ser)?,
            )?,
            correct_answers: u64_from_i64(
                "correct_answers",
                row.try_get("correct_answers").map_err(ser)?,
            )?,
        })
    }
}
