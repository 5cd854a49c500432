//! Locale-aware time formatting.

use chrono::{DateTime, Locale, Utc};
use chrono_tz::Tz;

/// Maps a configured language code onto a chrono formatting locale.
///
/// The supported set uses bare language codes while chrono's locales are
/// full POSIX names, so the codes shipped by default are pinned and
/// anything else falls back to a direct parse, then to POSIX.
fn formatting_locale(code: &str) -> Locale {
    match code {
        "en" => Locale::en_US,
        "fr" => Locale::fr_FR,
        "am" => Locale::am_ET,
        other => other.try_into().unwrap_or(Locale::POSIX),
    }
}

/// Formats an instant as the locale's preferred time-of-day string in the
/// given timezone.
pub fn format_time(instant: DateTime<Utc>, tz: Tz, locale_code: &str) -> String {
    instant
        .with_timezone(&tz)
        .format_localized("%X", formatting_locale(locale_code))
        .to_string()
}
