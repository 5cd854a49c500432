//! The timezone fallback chain.

use std::str::FromStr;

use chrono_tz::Tz;

use crate::directory::UserRecord;
use crate::settings::Settings;

/// Which step of the fallback chain produced the resolved timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezoneSource {
    /// The `timezone` query parameter.
    Query,
    /// The logged-in user's stored preference.
    UserPreference,
    /// The configured default.
    Default,
}

/// A timezone name that failed tz-database validation.
///
/// Discards are diagnostics for logging and tests, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimezoneDiscard {
    UnknownQuery(String),
    UnknownUserPreference(String),
}

/// Outcome of timezone resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimezone {
    pub tz: Tz,
    pub source: TimezoneSource,
    pub discarded: Vec<TimezoneDiscard>,
}

/// Per-request inputs to timezone resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimezoneInputs<'a> {
    /// The `timezone` query parameter, verbatim.
    pub query: Option<&'a str>,
    /// The user selected by `login_as`, if any.
    pub user: Option<&'a UserRecord>,
}

/// Resolves the display timezone: query parameter, user preference,
/// configured default. Names missing from the tz database are discarded
/// and the chain moves on; nothing here is an error.
pub fn resolve_timezone(inputs: TimezoneInputs<'_>, settings: &Settings) -> ResolvedTimezone {
    let mut discarded = Vec::new();

    if let Some(query) = inputs.query {
        match Tz::from_str(query) {
            Ok(tz) => {
                return ResolvedTimezone {
                    tz,
                    source: TimezoneSource::Query,
                    discarded,
                }
            }
            Err(_) => discarded.push(TimezoneDiscard::UnknownQuery(query.to_string())),
        }
    }

    let stored = inputs
        .user
        .and_then(|user| user.timezone.as_deref())
        .filter(|name| !name.is_empty());
    if let Some(name) = stored {
        match Tz::from_str(name) {
            Ok(tz) => {
                return ResolvedTimezone {
                    tz,
                    source: TimezoneSource::UserPreference,
                    discarded,
                }
            }
            Err(_) => discarded.push(TimezoneDiscard::UnknownUserPreference(name.to_string())),
        }
    }

    ResolvedTimezone {
        tz: settings.default_timezone(),
        source: TimezoneSource::Default,
        discarded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::new(vec!["en".to_string()], "en", "UTC").unwrap()
    }

    #[test]
    fn test_valid_query_wins() {
        let resolved = resolve_timezone(
            TimezoneInputs {
                query: Some("Asia/Tokyo"),
                ..Default::default()
            },
            &settings(),
        );

        assert_eq!(resolved.tz, chrono_tz::Asia::Tokyo);
        assert_eq!(resolved.source, TimezoneSource::Query);
        assert!(resolved.discarded.is_empty());
    }

    #[test]
    fn test_invalid_query_falls_to_user() {
        let user = UserRecord::new(1, "Balou").with_timezone("Europe/Paris");
        let resolved = resolve_timezone(
            TimezoneInputs {
                query: Some("Mars/Olympus"),
                user: Some(&user),
            },
            &settings(),
        );

        assert_eq!(resolved.tz, chrono_tz::Europe::Paris);
        assert_eq!(resolved.source, TimezoneSource::UserPreference);
        assert_eq!(
            resolved.discarded,
            vec![TimezoneDiscard::UnknownQuery("Mars/Olympus".to_string())]
        );
    }

    #[test]
    fn test_invalid_user_preference_falls_to_default() {
        let user = UserRecord::new(3, "Spock").with_timezone("Vulcan");
        let resolved = resolve_timezone(
            TimezoneInputs {
                user: Some(&user),
                ..Default::default()
            },
            &settings(),
        );

        assert_eq!(resolved.tz, chrono_tz::UTC);
        assert_eq!(resolved.source, TimezoneSource::Default);
        assert_eq!(
            resolved.discarded,
            vec![TimezoneDiscard::UnknownUserPreference("Vulcan".to_string())]
        );
    }

    #[test]
    fn test_empty_user_preference_is_skipped() {
        let user = UserRecord::new(5, "Nobody").with_timezone("");
        let resolved = resolve_timezone(
            TimezoneInputs {
                user: Some(&user),
                ..Default::default()
            },
            &settings(),
        );

        assert_eq!(resolved.source, TimezoneSource::Default);
        assert!(resolved.discarded.is_empty());
    }

    #[test]
    fn test_legacy_alias_names_validate() {
        let user = UserRecord::new(2, "Beyonce").with_timezone("US/Central");
        let resolved = resolve_timezone(
            TimezoneInputs {
                user: Some(&user),
                ..Default::default()
            },
            &settings(),
        );

        assert_eq!(resolved.tz, chrono_tz::US::Central);
        assert_eq!(resolved.source, TimezoneSource::UserPreference);
    }

    #[test]
    fn test_no_inputs_yield_default() {
        let resolved = resolve_timezone(TimezoneInputs::default(), &settings());

        assert_eq!(resolved.tz, chrono_tz::UTC);
        assert_eq!(resolved.source, TimezoneSource::Default);
    }
}
