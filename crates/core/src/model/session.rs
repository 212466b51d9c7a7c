use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Difficulty, TimeLimit};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrainingRecordError {
    #[error("correct answers ({correct}) exceed total questions ({total})")]
    CorrectExceedsTotal { total: u32, correct: u32 },

    #[error("a training session record needs at least one answered question")]
    NoQuestions,
}

/// Persisted summary of one finished training session.
///
/// Records are append-only; the application never edits or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSessionRecord {
    difficulty: Difficulty,
    total_questions: u32,
    correct_answers: u32,
    time_limit: TimeLimit,
    created_at: DateTime<Utc>,
}

impl TrainingSessionRecord {
    /// Builds the record written when a session ends.
    ///
    /// # Errors
    ///
    /// Returns `TrainingRecordError::NoQuestions` if nothing was answered, or
    /// `TrainingRecordError::CorrectExceedsTotal` if the counts are inconsistent.
    pub fn new(
        difficulty: Difficulty,
        total_questions: u32,
        correct_answers: u32,
        time_limit: TimeLimit,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TrainingRecordError> {
        if total_questions == 0 {
            return Err(TrainingRecordError::NoQuestions);
        }
        Self::from_persisted(
            difficulty,
            total_questions,
            correct_answers,
            time_limit,
            created_at,
        )
    }

    /// Rehydrate a record from storage.
    ///
    /// Stored rows with zero questions are accepted so old data still loads.
    ///
    /// # Errors
    ///
    /// Returns `TrainingRecordError::CorrectExceedsTotal` if the counts are inconsistent.
    pub fn from_persisted(
        difficulty: Difficulty,
        total_questions: u32,
        correct_answers: u32,
        time_limit: TimeLimit,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TrainingRecordError> {
        if correct_answers > total_questions {
            return Err(TrainingRecordError::CorrectExceedsTotal {
                total: total_questions,
                correct: correct_answers,
            });
        }
        Ok(Self {
            difficulty,
            total_questions,
            correct_answers,
            time_limit,
            created_at,
        })
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn time_limit(&self) -> TimeLimit {
        self.time_limit
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Percentage of correct answers in this session.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        crate::model::accuracy_percent(
            u64::from(self.correct_answers),
            u64::from(self.total_questions),
        )
    }
}
