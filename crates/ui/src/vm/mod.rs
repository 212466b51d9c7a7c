mod session_card_vm;
mod stats_vm;
mod time_fmt;
mod training_vm;

pub use session_card_vm::{SessionCardVm, map_session_cards};
pub use stats_vm::StatsVm;
pub use time_fmt::format_datetime;
pub use training_vm::{
    NewTrainingForm, TrainingScreenVm, difficulty_options, time_options,
};
