use std::sync::Arc;

use rand::rngs::StdRng;
use storage::repository::{AppSettingsRepository, TrainingSessionRepository};
use trainer_core::model::{TrainingSessionId, TrainingSessionRecord};

use super::session::{AnswerOutcome, TrainingConfig, TrainingSession};
use super::speech::{NoopSpeaker, Speaker};
use crate::Clock;
use crate::error::TrainingError;

/// A training session plus what the loop tracks around it.
pub struct TrainingRun {
    session: TrainingSession,
    voice_enabled: bool,
    record_id: Option<TrainingSessionId>,
    unsaved: Option<TrainingSessionRecord>,
}

impl TrainingRun {
    #[must_use]
    pub fn session(&self) -> &TrainingSession {
        &self.session
    }

    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    /// Id of the persisted record once the run has ended with answers.
    #[must_use]
    pub fn record_id(&self) -> Option<TrainingSessionId> {
        self.record_id
    }

    /// True when the run has ended but its record is not stored yet.
    #[must_use]
    pub fn has_unsaved_record(&self) -> bool {
        self.unsaved.is_some()
    }
}

/// Orchestrates training runs: speech, timing, and persistence on end.
#[derive(Clone)]
pub struct TrainingLoopService {
    clock: Clock,
    sessions: Arc<dyn TrainingSessionRepository>,
    settings: Arc<dyn AppSettingsRepository>,
    speaker: Arc<dyn Speaker>,
}

impl TrainingLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        sessions: Arc<dyn TrainingSessionRepository>,
        settings: Arc<dyn AppSettingsRepository>,
    ) -> Self {
        Self {
            clock,
            sessions,
            settings,
            speaker: Arc::new(NoopSpeaker),
        }
    }

    #[must_use]
    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        self.speaker = speaker;
        self
    }

    /// Start a run and announce its first question.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::Storage` if settings cannot be loaded.
    pub async fn start(&self, config: TrainingConfig) -> Result<TrainingRun, TrainingError> {
        let session = TrainingSession::start(config, self.clock.now());
        self.begin(session).await
    }

    /// Like `start`, with a caller-provided generator.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::Storage` if settings cannot be loaded.
    pub async fn start_with_rng(
        &self,
        config: TrainingConfig,
        rng: StdRng,
    ) -> Result<TrainingRun, TrainingError> {
        let session = TrainingSession::start_with_rng(config, self.clock.now(), rng);
        self.begin(session).await
    }

    async fn begin(&self, session: TrainingSession) -> Result<TrainingRun, TrainingError> {
        let voice_enabled = self
            .settings
            .get_settings()
            .await?
            .unwrap_or_default()
            .voice_enabled();
        let config = session.config();
        tracing::info!(
            difficulty = %config.difficulty(),
            range = %config.range(),
            time_limit = %config.time_limit(),
            voice_enabled,
            "training started"
        );
        let run = TrainingRun {
            session,
            voice_enabled,
            record_id: None,
            unsaved: None,
        };
        self.announce(&run);
        Ok(run)
    }

    /// Submit an answer for the current question.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError` if no question is awaiting an answer.
    pub fn submit(&self, run: &mut TrainingRun, input: &str) -> Result<AnswerOutcome, TrainingError> {
        let outcome = run.session.submit(input)?;
        if outcome.is_correct() {
            self.announce(run);
        }
        Ok(outcome)
    }

    /// One-second timer tick.
    pub fn tick(&self, run: &mut TrainingRun) -> Option<AnswerOutcome> {
        let outcome = run.session.tick();
        if outcome.is_some() {
            tracing::debug!(score = %run.session.score_label(), "question timed out");
        }
        outcome
    }

    /// Move from feedback to a fresh question.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError` unless feedback is pending.
    pub fn next_question(&self, run: &mut TrainingRun) -> Result<(), TrainingError> {
        run.session.next_question()?;
        self.announce(run);
        Ok(())
    }

    /// End the run and persist its record when anything was answered.
    ///
    /// A record that failed to save stays on the run; calling `end` again
    /// retries the save without ending the session twice.
    ///
    /// # Errors
    ///
    /// Returns `TrainingError::Ended` if already ended and saved, or a storage
    /// error if the record cannot be saved.
    pub async fn end(&self, run: &mut TrainingRun) -> Result<Option<TrainingSessionId>, TrainingError> {
        let record = match run.unsaved.take() {
            Some(record) => record,
            None => {
                self.speaker.stop();
                let Some(record) = run.session.end(self.clock.now())? else {
                    tracing::info!("training ended without answers; nothing saved");
                    return Ok(None);
                };
                record
            }
        };

        let id = match self.sessions.append_session(&record).await {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(error = %err, "training session not saved; keeping record for retry");
                run.unsaved = Some(record);
                return Err(err.into());
            }
        };
        run.record_id = Some(id);
        tracing::info!(
            id = %id,
            difficulty = %record.difficulty(),
            total = record.total_questions(),
            correct = record.correct_answers(),
            "training session saved"
        );
        Ok(Some(id))
    }

    fn announce(&self, run: &TrainingRun) {
        if !run.voice_enabled {
            return;
        }
        if let Err(err) = self.speaker.speak(&run.session.question().spoken()) {
            tracing::debug!(error = %err, "speech failed");
        }
    }
}
