use std::sync::Arc;

use services::{AppSettingsService, StatsService, TrainingLoopService};

pub trait UiApp: Send + Sync {
    fn training(&self) -> Arc<TrainingLoopService>;
    fn stats(&self) -> Arc<StatsService>;
    fn app_settings(&self) -> Arc<AppSettingsService>;
}

#[derive(Clone)]
pub struct AppContext {
    training: Arc<TrainingLoopService>,
    stats: Arc<StatsService>,
    app_settings: Arc<AppSettingsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            training: app.training(),
            stats: app.stats(),
            app_settings: app.app_settings(),
        }
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
