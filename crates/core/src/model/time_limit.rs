use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeLimitError {
    #[error("invalid time limit: {0}")]
    InvalidLabel(String),
}

/// Time allotted to answer one question.
///
/// Persisted as a second count where `0` means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeLimit {
    Unlimited,
    Seconds(NonZeroU32),
}

impl TimeLimit {
    pub const DEFAULT_SECS: u32 = 10;

    /// Choices offered on the new-training screen.
    pub const CHOICES_SECS: [u32; 7] = [0, 5, 10, 15, 20, 30, 60];

    #[must_use]
    pub fn from_secs(secs: u32) -> Self {
        NonZeroU32::new(secs).map_or(TimeLimit::Unlimited, TimeLimit::Seconds)
    }

    #[must_use]
    pub fn as_secs(self) -> u32 {
        match self {
            TimeLimit::Unlimited => 0,
            TimeLimit::Seconds(secs) => secs.get(),
        }
    }

    #[must_use]
    pub fn is_unlimited(self) -> bool {
        matches!(self, TimeLimit::Unlimited)
    }

    /// Label for a selector entry: `Unlimited` or `N seconds`.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            TimeLimit::Unlimited => "Unlimited".to_string(),
            TimeLimit::Seconds(secs) => format!("{secs} seconds"),
        }
    }

    /// Parses a selector label.
    ///
    /// # Errors
    ///
    /// Returns `TimeLimitError::InvalidLabel` when the label has no leading number.
    pub fn parse_label(label: &str) -> Result<Self, TimeLimitError> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("unlimited") {
            return Ok(TimeLimit::Unlimited);
        }
        trimmed
            .split_whitespace()
            .next()
            .and_then(|head| head.parse::<u32>().ok())
            .map(Self::from_secs)
            .ok_or_else(|| TimeLimitError::InvalidLabel(label.to_string()))
    }

    /// Like [`TimeLimit::parse_label`], but falls back to the default limit.
    #[must_use]
    pub fn parse_label_or_default(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_default()
    }

    #[must_use]
    pub fn choices() -> Vec<TimeLimit> {
        Self::CHOICES_SECS.iter().copied().map(Self::from_secs).collect()
    }
}

impl Default for TimeLimit {
    fn default() -> Self {
        Self::from_secs(Self::DEFAULT_SECS)
    }
}

impl fmt::Display for TimeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Outcome of advancing a countdown by one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Unlimited or already expired; nothing changed.
    Idle,
    Running { remaining: u32 },
    Expired,
}

/// Per-question countdown driven by one-second ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    limit: TimeLimit,
    remaining: u32,
}

impl Countdown {
    #[must_use]
    pub fn start(limit: TimeLimit) -> Self {
        Self {
            limit,
            remaining: limit.as_secs(),
        }
    }

    #[must_use]
    pub fn limit(&self) -> TimeLimit {
        self.limit
    }

    /// Seconds left, or `None` when unlimited.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        match self.limit {
            TimeLimit::Unlimited => None,
            TimeLimit::Seconds(_) => Some(self.remaining),
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        !self.limit.is_unlimited() && self.remaining == 0
    }

    /// Restarts the countdown at the full limit.
    pub fn reset(&mut self) {
        self.remaining = self.limit.as_secs();
    }

    pub fn tick(&mut self) -> Tick {
        if self.limit.is_unlimited() || self.remaining == 0 {
            return Tick::Idle;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            Tick::Expired
        } else {
            Tick::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Timer text for the training screen: `Time: N` or `Time: ∞`.
    #[must_use]
    pub fn label(&self) -> String {
        match self.remaining() {
            Some(secs) => format!("Time: {secs}"),
            None => "Time: \u{221e}".to_string(),
        }
    }
}
