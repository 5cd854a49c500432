//! Validated, immutable service settings.

use std::str::FromStr;

use chrono_tz::Tz;
use thiserror::Error;

/// Errors raised while validating settings at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Supported locale list cannot be empty")]
    NoSupportedLocales,
    #[error("Default locale '{0}' is not in the supported locale list")]
    DefaultLocaleUnsupported(String),
    #[error("Unknown default timezone: {0}")]
    UnknownDefaultTimezone(String),
}

/// Service settings, constructed once in `main` and passed into the
/// resolvers. Construction validates the cross-field invariants so the
/// request path never has to.
#[derive(Debug, Clone)]
pub struct Settings {
    supported_locales: Vec<String>,
    default_locale: String,
    default_timezone: Tz,
}

impl Settings {
    pub fn new(
        supported_locales: Vec<String>,
        default_locale: &str,
        default_timezone: &str,
    ) -> Result<Self, SettingsError> {
        if supported_locales.is_empty() {
            return Err(SettingsError::NoSupportedLocales);
        }
        if !supported_locales.iter().any(|code| code == default_locale) {
            return Err(SettingsError::DefaultLocaleUnsupported(
                default_locale.to_string(),
            ));
        }
        let default_timezone = Tz::from_str(default_timezone)
            .map_err(|_| SettingsError::UnknownDefaultTimezone(default_timezone.to_string()))?;

        Ok(Self {
            supported_locales,
            default_locale: default_locale.to_string(),
            default_timezone,
        })
    }

    pub fn supported_locales(&self) -> &[String] {
        &self.supported_locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn default_timezone(&self) -> Tz {
        self.default_timezone
    }

    /// Exact membership test against the supported set. Deliberately not a
    /// language-tag comparison; candidates that need fuzzy matching go
    /// through negotiation instead.
    pub fn is_supported(&self, code: &str) -> bool {
        self.supported_locales.iter().any(|c| c == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_valid_settings() {
        let settings = Settings::new(codes(&["en", "fr", "am"]), "en", "UTC").unwrap();

        assert_eq!(settings.default_locale(), "en");
        assert_eq!(settings.default_timezone(), chrono_tz::UTC);
        assert!(settings.is_supported("fr"));
        assert!(!settings.is_supported("es"));
    }

    #[test]
    fn test_empty_supported_list_rejected() {
        let err = Settings::new(vec![], "en", "UTC").unwrap_err();
        assert_eq!(err, SettingsError::NoSupportedLocales);
    }

    #[test]
    fn test_default_locale_must_be_supported() {
        let err = Settings::new(codes(&["en", "fr"]), "de", "UTC").unwrap_err();
        assert_eq!(err, SettingsError::DefaultLocaleUnsupported("de".to_string()));
    }

    #[test]
    fn test_unknown_default_timezone_rejected() {
        let err = Settings::new(codes(&["en"]), "en", "Vulcan").unwrap_err();
        assert_eq!(err, SettingsError::UnknownDefaultTimezone("Vulcan".to_string()));
    }

    #[test]
    fn test_membership_is_exact() {
        let settings = Settings::new(codes(&["en", "fr"]), "en", "UTC").unwrap();

        assert!(!settings.is_supported("EN"));
        assert!(!settings.is_supported("en-US"));
    }
}
