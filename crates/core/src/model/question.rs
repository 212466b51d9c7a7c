use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::difficulty::OperandRange;

/// A single multiplication problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    left: u32,
    right: u32,
}

/// Result of checking a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerCheck {
    Correct,
    Wrong { expected: u64 },
}

impl AnswerCheck {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerCheck::Correct)
    }
}

impl Question {
    #[must_use]
    pub fn new(left: u32, right: u32) -> Self {
        Self { left, right }
    }

    /// Draws both operands uniformly from `range` (inclusive on both ends).
    pub fn generate<R: Rng>(range: OperandRange, rng: &mut R) -> Self {
        let left = rng.random_range(range.min()..=range.max());
        let right = rng.random_range(range.min()..=range.max());
        Self { left, right }
    }

    #[must_use]
    pub fn left(&self) -> u32 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[must_use]
    pub fn answer(&self) -> u64 {
        u64::from(self.left) * u64::from(self.right)
    }

    /// Text shown on the training screen, e.g. `5 x 10 = ?`.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!("{} x {} = ?", self.left, self.right)
    }

    /// Text handed to the speech hook, e.g. `5 times 10`.
    #[must_use]
    pub fn spoken(&self) -> String {
        format!("{} times {}", self.left, self.right)
    }

    /// Compares raw user input with the product.
    ///
    /// Empty or non-numeric input counts as a wrong answer.
    #[must_use]
    pub fn check(&self, input: &str) -> AnswerCheck {
        match parse_answer(input) {
            Some(value) if value == self.answer() => AnswerCheck::Correct,
            _ => AnswerCheck::Wrong {
                expected: self.answer(),
            },
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.left, self.right)
    }
}

/// Parses a submitted answer. Returns `None` for anything that is not a
/// non-negative integer.
#[must_use]
pub fn parse_answer(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u64>().ok()
}
