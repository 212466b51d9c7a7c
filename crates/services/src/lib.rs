#![forbid(unsafe_code)]

pub mod app_services;
pub mod app_settings_service;
pub mod error;
pub mod stats_service;
pub mod training;

pub use trainer_core::Clock;

pub use app_services::AppServices;
pub use app_settings_service::AppSettingsService;
pub use error::{
    AppServicesError, AppSettingsServiceError, SpeechError, StatsError, TrainingError,
};
pub use stats_service::{DEFAULT_RECENT_LIMIT, SessionListItem, StatsOverview, StatsService};
pub use training::{
    AnswerOutcome, Feedback, NoopSpeaker, Speaker, TrainingConfig, TrainingLoopService,
    TrainingPhase, TrainingRun, TrainingSession,
};
