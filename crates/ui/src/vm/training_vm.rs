use services::{TrainingConfig, TrainingPhase, TrainingRun};
use trainer_core::model::{Difficulty, OperandRange, TimeLimit};

//
// ─── NEW TRAINING FORM ────────────────────────────────────────────────────────
//

/// Raw values of the new-training form, as typed or selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTrainingForm {
    pub difficulty: Difficulty,
    pub time_label: String,
    pub custom_min: String,
    pub custom_max: String,
}

impl Default for NewTrainingForm {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            time_label: TimeLimit::default().label(),
            custom_min: OperandRange::DEFAULT_CUSTOM.min().to_string(),
            custom_max: OperandRange::DEFAULT_CUSTOM.max().to_string(),
        }
    }
}

impl NewTrainingForm {
    #[must_use]
    pub fn shows_custom_range(&self) -> bool {
        self.difficulty == Difficulty::Custom
    }

    /// Custom bounds only apply to `Custom`; presets ignore them.
    #[must_use]
    pub fn to_config(&self) -> TrainingConfig {
        let time_limit = TimeLimit::parse_label_or_default(&self.time_label);
        if self.shows_custom_range() {
            TrainingConfig::custom(&self.custom_min, &self.custom_max, time_limit)
        } else {
            TrainingConfig::preset(self.difficulty, time_limit)
        }
    }
}

#[must_use]
pub fn difficulty_options() -> Vec<&'static str> {
    Difficulty::ALL.iter().map(|d| d.label()).collect()
}

#[must_use]
pub fn time_options() -> Vec<String> {
    TimeLimit::choices().into_iter().map(TimeLimit::label).collect()
}

//
// ─── TRAINING SCREEN ──────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingScreenVm {
    pub difficulty: &'static str,
    pub question: String,
    pub timer: String,
    pub score: String,
    /// Wrong-answer text while feedback is showing.
    pub feedback: Option<String>,
    pub timed_out: bool,
    pub ended: bool,
    /// Ended, but the record still has to be stored.
    pub save_pending: bool,
}

impl TrainingScreenVm {
    #[must_use]
    pub fn from_run(run: &TrainingRun) -> Self {
        let session = run.session();
        let (feedback, timed_out) = match session.phase() {
            TrainingPhase::Feedback(feedback) => (Some(feedback.message()), feedback.timed_out),
            TrainingPhase::Question | TrainingPhase::Ended => (None, false),
        };
        Self {
            difficulty: session.config().difficulty().label(),
            question: session.question().prompt(),
            timer: session.timer_label(),
            score: session.score_label(),
            feedback,
            timed_out,
            ended: session.is_ended(),
            save_pending: run.has_unsaved_record(),
        }
    }

    #[must_use]
    pub fn awaiting_answer(&self) -> bool {
        self.feedback.is_none() && !self.ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_easy_ten_seconds() {
        let form = NewTrainingForm::default();
        let config = form.to_config();
        assert_eq!(config.difficulty(), Difficulty::Easy);
        assert_eq!(config.range(), OperandRange::EASY);
        assert_eq!(config.time_limit(), TimeLimit::from_secs(10));
        assert!(!form.shows_custom_range());
    }

    #[test]
    fn custom_form_parses_bounds_and_labels() {
        let form = NewTrainingForm {
            difficulty: Difficulty::Custom,
            time_label: "Unlimited".into(),
            custom_min: "12".into(),
            custom_max: "3".into(),
        };
        let config = form.to_config();
        assert_eq!(config.range(), OperandRange::from_bounds(3, 12));
        assert!(config.time_limit().is_unlimited());
    }

    #[test]
    fn preset_ignores_custom_inputs_and_bad_time_label() {
        let form = NewTrainingForm {
            difficulty: Difficulty::Hard,
            time_label: "forever".into(),
            custom_min: "1".into(),
            custom_max: "2".into(),
        };
        let config = form.to_config();
        assert_eq!(config.range(), OperandRange::HARD);
        assert_eq!(config.time_limit(), TimeLimit::default());
    }

    #[test]
    fn option_labels_match_choices() {
        assert_eq!(difficulty_options(), vec!["Easy", "Medium", "Hard", "Custom"]);
        let times = time_options();
        assert_eq!(times.first().map(String::as_str), Some("Unlimited"));
        assert!(times.contains(&"60 seconds".to_string()));
    }
}
