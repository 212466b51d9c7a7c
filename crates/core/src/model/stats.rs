use serde::{Deserialize, Serialize};

/// `correct / total * 100`, or `0` when nothing was asked.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn accuracy_percent(correct: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    correct as f64 / total as f64 * 100.0
}

/// Totals across every stored training session.
///
/// Always derived from the records on read; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingStats {
    pub sessions: u64,
    pub total_questions: u64,
    pub correct_answers: u64,
}

impl TrainingStats {
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        accuracy_percent(self.correct_answers, self.total_questions)
    }

    /// Folds one more session into the totals.
    #[must_use]
    pub fn with_session(self, total_questions: u32, correct_answers: u32) -> Self {
        Self {
            sessions: self.sessions + 1,
            total_questions: self.total_questions + u64::from(total_questions),
            correct_answers: self.correct_answers + u64::from(correct_answers),
        }
    }
}
