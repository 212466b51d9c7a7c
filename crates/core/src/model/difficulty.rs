use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("unknown difficulty: {0}")]
    Unknown(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OperandRangeError {
    #[error("operand range is inverted: min {min} > max {max}")]
    Inverted { min: u32, max: u32 },
}

//
// ─── OPERAND RANGE ────────────────────────────────────────────────────────────
//

/// Inclusive range operands are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperandRange {
    min: u32,
    max: u32,
}

impl OperandRange {
    pub const EASY: Self = Self { min: 0, max: 10 };
    pub const MEDIUM: Self = Self { min: 10, max: 20 };
    pub const HARD: Self = Self { min: 20, max: 100 };

    /// Default bounds for a custom range when a bound is missing or malformed.
    pub const DEFAULT_CUSTOM: Self = Self { min: 0, max: 10 };

    /// # Errors
    ///
    /// Returns `OperandRangeError::Inverted` if `min > max`.
    pub fn new(min: u32, max: u32) -> Result<Self, OperandRangeError> {
        if min > max {
            return Err(OperandRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a range from two bounds in either order.
    #[must_use]
    pub fn from_bounds(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Parses user-entered bounds for a custom range.
    ///
    /// Empty or malformed text falls back to the default bound on that side
    /// only, so `("abc", "50")` gives `0..=50`. Bounds given in the wrong
    /// order are swapped.
    #[must_use]
    pub fn parse_custom(min: &str, max: &str) -> Self {
        let min = min
            .trim()
            .parse::<u32>()
            .unwrap_or(Self::DEFAULT_CUSTOM.min);
        let max = max
            .trim()
            .parse::<u32>()
            .unwrap_or(Self::DEFAULT_CUSTOM.max);
        Self::from_bounds(min, max)
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for OperandRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

/// Named difficulty preset for a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    /// User-defined operand range.
    Custom,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Custom,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Custom => "Custom",
        }
    }

    /// Operand range of a named preset. `Custom` has none.
    #[must_use]
    pub fn preset_range(self) -> Option<OperandRange> {
        match self {
            Difficulty::Easy => Some(OperandRange::EASY),
            Difficulty::Medium => Some(OperandRange::MEDIUM),
            Difficulty::Hard => Some(OperandRange::HARD),
            Difficulty::Custom => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "custom" => Ok(Difficulty::Custom),
            _ => Err(DifficultyError::Unknown(s.to_string())),
        }
    }
}
