use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::app_settings_service::AppSettingsService;
use crate::error::AppServicesError;
use crate::stats_service::StatsService;
use crate::training::{Speaker, TrainingLoopService};

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    training: Arc<TrainingLoopService>,
    stats: Arc<StatsService>,
    app_settings: Arc<AppSettingsService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let training = Arc::new(TrainingLoopService::new(
            clock,
            Arc::clone(&storage.sessions),
            Arc::clone(&storage.settings),
        ));
        let stats = Arc::new(StatsService::new(Arc::clone(&storage.sessions)));
        let app_settings = Arc::new(AppSettingsService::new(Arc::clone(&storage.settings)));

        Self {
            training,
            stats,
            app_settings,
        }
    }

    /// Replace the speech backend used for question announcements.
    #[must_use]
    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        let training = (*self.training).clone().with_speaker(speaker);
        self.training = Arc::new(training);
        self
    }

    #[must_use]
    pub fn training(&self) -> Arc<TrainingLoopService> {
        Arc::clone(&self.training)
    }

    #[must_use]
    pub fn stats(&self) -> Arc<StatsService> {
        Arc::clone(&self.stats)
    }

    #[must_use]
    pub fn app_settings(&self) -> Arc<AppSettingsService> {
        Arc::clone(&self.app_settings)
    }
}
