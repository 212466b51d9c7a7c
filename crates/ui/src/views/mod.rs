mod history;
mod home;
mod new_training;
mod settings;
mod state;
mod training;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use history::HistoryView;
pub use home::HomeView;
pub use new_training::NewTrainingView;
pub use settings::SettingsView;
pub use state::{ErrorPanel, ViewError, ViewState, view_state_from_resource};
pub use training::TrainingView;
