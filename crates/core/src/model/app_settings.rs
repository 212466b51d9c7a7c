use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("unknown theme mode: {0}")]
    UnknownTheme(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = AppSettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            _ => Err(AppSettingsError::UnknownTheme(s.to_string())),
        }
    }
}

/// User preferences that survive restarts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    voice_enabled: bool,
    theme: ThemeMode,
}

impl AppSettings {
    #[must_use]
    pub fn new(voice_enabled: bool, theme: ThemeMode) -> Self {
        Self {
            voice_enabled,
            theme,
        }
    }

    /// Rehydrate settings from stored column values.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError::UnknownTheme` if the theme text is not recognised.
    pub fn from_persisted(voice_enabled: bool, theme: &str) -> Result<Self, AppSettingsError> {
        Ok(Self {
            voice_enabled,
            theme: theme.parse()?,
        })
    }

    #[must_use]
    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn with_voice_enabled(self, voice_enabled: bool) -> Self {
        Self {
            voice_enabled,
            ..self
        }
    }

    #[must_use]
    pub fn with_theme(self, theme: ThemeMode) -> Self {
        Self { theme, ..self }
    }
}
