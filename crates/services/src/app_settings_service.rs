use std::sync::Arc;

use storage::repository::AppSettingsRepository;
use trainer_core::model::{AppSettings, ThemeMode};

use crate::error::AppSettingsServiceError;

#[derive(Clone)]
pub struct AppSettingsService {
    repo: Arc<dyn AppSettingsRepository>,
}

impl AppSettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn AppSettingsRepository>) -> Self {
        Self { repo }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(storage::repository::InMemoryRepository::new()))
    }

    /// Load persisted settings (or defaults if missing).
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsServiceError` on storage failures.
    pub async fn load(&self) -> Result<AppSettings, AppSettingsServiceError> {
        let settings = self.repo.get_settings().await?;
        Ok(settings.unwrap_or_default())
    }

    /// Persist settings.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsServiceError` if persistence fails.
    pub async fn save(&self, settings: AppSettings) -> Result<AppSettings, AppSettingsServiceError> {
        self.repo.save_settings(&settings).await?;
        tracing::debug!(
            voice_enabled = settings.voice_enabled(),
            theme = %settings.theme(),
            "settings saved"
        );
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns `AppSettingsServiceError` on storage failures.
    pub async fn set_voice_enabled(
        &self,
        voice_enabled: bool,
    ) -> Result<AppSettings, AppSettingsServiceError> {
        let current = self.load().await?;
        self.save(current.with_voice_enabled(voice_enabled)).await
    }

    /// # Errors
    ///
    /// Returns `AppSettingsServiceError` on storage failures.
    pub async fn set_theme(&self, theme: ThemeMode) -> Result<AppSettings, AppSettingsServiceError> {
        let current = self.load().await?;
        self.save(current.with_theme(theme)).await
    }

    /// Switch between light and dark.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsServiceError` on storage failures.
    pub async fn toggle_theme(&self) -> Result<AppSettings, AppSettingsServiceError> {
        let current = self.load().await?;
        self.save(current.with_theme(current.theme().toggled())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_settings_load_as_defaults() {
        let svc = AppSettingsService::in_memory();
        assert_eq!(svc.load().await.unwrap(), AppSettings::default());
    }

    #[tokio::test]
    async fn updates_keep_the_other_field() {
        let svc = AppSettingsService::in_memory();
        svc.set_voice_enabled(true).await.unwrap();
        let toggled = svc.toggle_theme().await.unwrap();
        assert!(toggled.voice_enabled());
        assert_eq!(toggled.theme(), ThemeMode::Dark);

        let reloaded = svc.set_theme(ThemeMode::Light).await.unwrap();
        assert_eq!(reloaded, AppSettings::new(true, ThemeMode::Light));
        assert_eq!(svc.load().await.unwrap(), reloaded);
    }
}
