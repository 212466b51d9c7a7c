use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use trainer_core::model::{
    AnswerCheck, Countdown, Difficulty, OperandRange, Question, Tick, TimeLimit,
    TrainingSessionRecord,
};

use crate::error::TrainingError;

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Choices made on the new-training screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingConfig {
    difficulty: Difficulty,
    range: OperandRange,
    time_limit: TimeLimit,
}

impl TrainingConfig {
    /// Config for a difficulty; `Custom` uses `custom_range`, presets ignore it.
    #[must_use]
    pub fn new(difficulty: Difficulty, custom_range: OperandRange, time_limit: TimeLimit) -> Self {
        Self {
            difficulty,
            range: difficulty.preset_range().unwrap_or(custom_range),
            time_limit,
        }
    }

    /// Config for a preset difficulty, or the default custom range.
    #[must_use]
    pub fn preset(difficulty: Difficulty, time_limit: TimeLimit) -> Self {
        Self::new(difficulty, OperandRange::DEFAULT_CUSTOM, time_limit)
    }

    /// Custom config from free-text bounds.
    #[must_use]
    pub fn custom(min: &str, max: &str, time_limit: TimeLimit) -> Self {
        Self::new(
            Difficulty::Custom,
            OperandRange::parse_custom(min, max),
            time_limit,
        )
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn range(&self) -> OperandRange {
        self.range
    }

    #[must_use]
    pub fn time_limit(&self) -> TimeLimit {
        self.time_limit
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Easy, TimeLimit::default())
    }
}

//
// ─── PHASES AND OUTCOMES ───────────────────────────────────────────────────────
//

/// Wrong-answer details shown between questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub expected: u64,
    pub timed_out: bool,
}

impl Feedback {
    #[must_use]
    pub fn message(&self) -> String {
        format!("Wrong! The answer was {}", self.expected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingPhase {
    /// Awaiting input for the current question.
    Question,
    Feedback(Feedback),
    Ended,
}

/// Result of an answer or a timer expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct; the next question is already current.
    Correct,
    Wrong(Feedback),
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory training run: one question at a time with an optional countdown.
///
/// `correct <= total` holds after every transition.
pub struct TrainingSession {
    config: TrainingConfig,
    rng: StdRng,
    question: Question,
    question_seq: u64,
    countdown: Countdown,
    phase: TrainingPhase,
    correct: u32,
    total: u32,
    started_at: DateTime<Utc>,
}

impl TrainingSession {
    /// Start a session with an OS-seeded generator.
    #[must_use]
    pub fn start(config: TrainingConfig, started_at: DateTime<Utc>) -> Self {
        Self::start_with_rng(config, started_at, StdRng::from_rng(&mut rand::rng()))
    }

    /// Start a session with a caller-provided generator (seeded in tests).
    #[must_use]
    pub fn start_with_rng(
        config: TrainingConfig,
        started_at: DateTime<Utc>,
        mut rng: StdRng,
    ) -> Self {
        let question = Question::generate(config.range(), &mut rng);
        Self {
            config,
            rng,
            question,
            question_seq: 0,
            countdown: Countdown::start(config.time_limit()),
            phase: TrainingPhase::Question,
            correct: 0,
            total: 0,
            started_at,
        }
    }

    #[must_use]
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Bumped every time a new question becomes current; the countdown
    /// restarts from the full limit at each bump.
    #[must_use]
    pub fn question_seq(&self) -> u64 {
        self.question_seq
    }

    #[must_use]
    pub fn phase(&self) -> TrainingPhase {
        self.phase
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.phase == TrainingPhase::Ended
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}/{}", self.correct, self.total)
    }

    #[must_use]
    pub fn timer_label(&self) -> String {
        self.countdown.label()
    }

    /// Check `input` against the current question.
    ///
    /// A correct answer moves straight to a fresh question; anything else,
    /// including empty or malformed input, opens the feedback phase.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::NotAwaitingAnswer` outside the question phase.
    pub fn submit(&mut self, input: &str) -> Result<AnswerOutcome, TrainingError> {
        self.ensure_question_phase()?;
        Ok(self.record_answer(self.question.check(input), false))
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the wrong-answer outcome when the countdown reaches zero. Ticks
    /// outside the question phase or for unlimited time are ignored.
    pub fn tick(&mut self) -> Option<AnswerOutcome> {
        if self.phase != TrainingPhase::Question {
            return None;
        }
        match self.countdown.tick() {
            Tick::Expired => {
                let expected = self.question.answer();
                Some(self.record_answer(AnswerCheck::Wrong { expected }, true))
            }
            Tick::Idle | Tick::Running { .. } => None,
        }
    }

    /// Leave the feedback phase with a new question.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::NoFeedbackPending` unless feedback is showing,
    /// or `TrainingError::Ended` after the session ended.
    pub fn next_question(&mut self) -> Result<&Question, TrainingError> {
        match self.phase {
            TrainingPhase::Feedback(_) => {
                self.advance();
                Ok(&self.question)
            }
            TrainingPhase::Ended => Err(TrainingError::Ended),
            TrainingPhase::Question => Err(TrainingError::NoFeedbackPending),
        }
    }

    /// End the session.
    ///
    /// Returns the record to persist, or `None` when nothing was answered.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::Ended` if already ended.
    pub fn end(
        &mut self,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<TrainingSessionRecord>, TrainingError> {
        if self.is_ended() {
            return Err(TrainingError::Ended);
        }
        self.phase = TrainingPhase::Ended;
        if self.total == 0 {
            return Ok(None);
        }
        let record = TrainingSessionRecord::new(
            self.config.difficulty(),
            self.total,
            self.correct,
            self.config.time_limit(),
            ended_at,
        )?;
        Ok(Some(record))
    }

    fn ensure_question_phase(&self) -> Result<(), TrainingError> {
        match self.phase {
            TrainingPhase::Question => Ok(()),
            TrainingPhase::Ended => Err(TrainingError::Ended),
            TrainingPhase::Feedback(_) => Err(TrainingError::NotAwaitingAnswer),
        }
    }

    fn record_answer(&mut self, check: AnswerCheck, timed_out: bool) -> AnswerOutcome {
        self.total += 1;
        match check {
            AnswerCheck::Correct => {
                self.correct += 1;
                self.advance();
                AnswerOutcome::Correct
            }
            AnswerCheck::Wrong { expected } => {
                let feedback = Feedback {
                    expected,
                    timed_out,
                };
                self.phase = TrainingPhase::Feedback(feedback);
                AnswerOutcome::Wrong(feedback)
            }
        }
    }

    fn advance(&mut self) {
        self.question = Question::generate(self.config.range(), &mut self.rng);
        self.question_seq += 1;
        self.countdown.reset();
        self.phase = TrainingPhase::Question;
    }
}
