mod session;
mod speech;
mod workflow;

pub use crate::error::{SpeechError, TrainingError};
pub use session::{AnswerOutcome, Feedback, TrainingConfig, TrainingPhase, TrainingSession};
pub use speech::{NoopSpeaker, Speaker};
pub use workflow::{TrainingLoopService, TrainingRun};
