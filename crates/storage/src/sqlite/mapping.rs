use sqlx::Row;
use trainer_core::model::{Difficulty, TimeLimit, TrainingSessionId, TrainingSessionRecord};

use crate::repository::{StorageError, TrainingSessionRow};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

/// Stored difficulty text; `Difficulty::label` and `FromStr` stay in sync.
pub(crate) fn difficulty_from_str(value: &str) -> Result<Difficulty, StorageError> {
    value.parse().map_err(ser)
}

pub(crate) fn map_session_row(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<TrainingSessionRow, StorageError> {
    let id: i64 = row.try_get("id").map_err(ser)?;
    let difficulty = difficulty_from_str(&row.try_get::<String, _>("difficulty").map_err(ser)?)?;
    let total_questions = u32_from_i64(
        "total_questions",
        row.try_get::<i64, _>("total_questions").map_err(ser)?,
    )?;
    let correct_answers = u32_from_i64(
        "correct_answers",
        row.try_get::<i64, _>("correct_answers").map_err(ser)?,
    )?;
    let time_per_question = u32_from_i64(
        "time_per_question",
        row.try_get::<i64, _>("time_per_question").map_err(ser)?,
    )?;
    let created_at = row.try_get("date").map_err(ser)?;

    let record = TrainingSessionRecord::from_persisted(
        difficulty,
        total_questions,
        correct_answers,
        TimeLimit::from_secs(time_per_question),
        created_at,
    )
    .map_err(ser)?;

    Ok(TrainingSessionRow::new(TrainingSessionId::new(id), record))
}
