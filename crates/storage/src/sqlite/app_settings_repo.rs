use async_trait::async_trait;
use sqlx::Row;

use crate::repository::{AppSettingsRepository, StorageError};
use trainer_core::model::AppSettings;

use super::SqliteRepository;
use super::mapping::ser;

#[async_trait]
impl AppSettingsRepository for SqliteRepository {
    async fn get_settings(&self) -> Result<Option<AppSettings>, StorageError> {
        let row = sqlx::query("SELECT voice_enabled, theme_mode FROM app_settings WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let voice_enabled: bool = row.try_get("voice_enabled").map_err(ser)?;
        let theme_mode: String = row.try_get("theme_mode").map_err(ser)?;

        AppSettings::from_persisted(voice_enabled, &theme_mode)
            .map(Some)
            .map_err(ser)
    }

    async fn save_settings(&self, settings: &AppSettings) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO app_settings (id, voice_enabled, theme_mode)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(id) DO UPDATE SET
                voice_enabled = excluded.voice_enabled,
                theme_mode = excluded.theme_mode
            ",
        )
        .bind(1_i64)
        .bind(settings.voice_enabled())
        .bind(settings.theme().as_str())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }
}
