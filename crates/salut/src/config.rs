use std::env;

use salut_core::{Settings, SettingsError};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Comma-separated supported locale codes (default: "en,fr,am")
    pub supported_locales: String,
    /// Default display locale (default: "en")
    pub default_locale: String,
    /// Default display timezone (default: "UTC")
    pub default_timezone: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SUPPORTED_LOCALES` - Comma-separated locale codes (default: "en,fr,am")
    /// - `DEFAULT_LOCALE` - Default display locale (default: "en")
    /// - `DEFAULT_TIMEZONE` - Default display timezone (default: "UTC")
    pub fn from_env() -> Self {
        Self {
            supported_locales: env::var("SUPPORTED_LOCALES")
                .unwrap_or_else(|_| "en,fr,am".to_string()),
            default_locale: env::var("DEFAULT_LOCALE").unwrap_or_else(|_| "en".to_string()),
            default_timezone: env::var("DEFAULT_TIMEZONE").unwrap_or_else(|_| "UTC".to_string()),
        }
    }

    /// Validate the raw configuration into immutable service settings.
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let supported = self
            .supported_locales
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        Settings::new(
            supported,
            self.default_locale.trim(),
            self.default_timezone.trim(),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
