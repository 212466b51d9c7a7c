mod app_settings;
mod difficulty;
mod ids;
mod question;
mod session;
mod stats;
mod time_limit;

pub use app_settings::{AppSettings, AppSettingsError, ThemeMode};
pub use difficulty::{Difficulty, DifficultyError, OperandRange, OperandRangeError};
pub use ids::TrainingSessionId;
pub use question::{AnswerCheck, Question, parse_answer};
pub use session::{TrainingRecordError, TrainingSessionRecord};
pub use stats::{TrainingStats, accuracy_percent};
pub use time_limit::{Countdown, Tick, TimeLimit, TimeLimitError};
