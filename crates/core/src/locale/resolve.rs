//! The locale fallback chain.

use crate::directory::UserRecord;
use crate::settings::Settings;

use super::negotiate::negotiate;

/// Which step of the fallback chain produced the resolved locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    /// The `locale` query parameter.
    Query,
    /// The logged-in user's stored preference.
    UserPreference,
    /// The raw `Accept-Language` value matched a supported code verbatim.
    HeaderLiteral,
    /// Weighted `Accept-Language` negotiation.
    Negotiated,
    /// Nothing matched; the configured default.
    Default,
}

/// An input that was considered and rejected on the way down the chain.
///
/// Discards are diagnostics for logging and tests, never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleDiscard {
    /// A `locale` query parameter outside the supported set.
    UnsupportedQuery(String),
    /// A stored user preference outside the supported set.
    UnsupportedUserPreference(String),
}

/// Outcome of locale resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    /// A member of the configured supported set, always.
    pub code: String,
    pub source: LocaleSource,
    pub discarded: Vec<LocaleDiscard>,
}

/// Per-request inputs to locale resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleInputs<'a> {
    /// The `locale` query parameter, verbatim.
    pub query: Option<&'a str>,
    /// The user selected by `login_as`, if any.
    pub user: Option<&'a UserRecord>,
    /// The raw `Accept-Language` header value.
    pub accept_language: Option<&'a str>,
}

/// Resolves the display locale; first acceptable input wins.
///
/// The chain is: query parameter, user preference, literal header match,
/// weighted negotiation, configured default. The literal header match
/// (step three) compares the whole header string against the supported
/// set, so a client sending a bare `Accept-Language: fr` short-circuits
/// negotiation entirely. Structured headers fail the literal test and
/// fall through to negotiation.
pub fn resolve_locale(inputs: LocaleInputs<'_>, settings: &Settings) -> ResolvedLocale {
    let mut discarded = Vec::new();

    if let Some(query) = inputs.query {
        if settings.is_supported(query) {
            return ResolvedLocale {
                code: query.to_string(),
                source: LocaleSource::Query,
                discarded,
            };
        }
        discarded.push(LocaleDiscard::UnsupportedQuery(query.to_string()));
    }

    if let Some(locale) = inputs.user.and_then(|user| user.locale.as_deref()) {
        if settings.is_supported(locale) {
            return ResolvedLocale {
                code: locale.to_string(),
                source: LocaleSource::UserPreference,
                discarded,
            };
        }
        discarded.push(LocaleDiscard::UnsupportedUserPreference(locale.to_string()));
    }

    if let Some(header) = inputs.accept_language {
        if settings.is_supported(header) {
            return ResolvedLocale {
                code: header.to_string(),
                source: LocaleSource::HeaderLiteral,
                discarded,
            };
        }
        if let Some(code) = negotiate(header, settings.supported_locales()) {
            return ResolvedLocale {
                code,
                source: LocaleSource::Negotiated,
                discarded,
            };
        }
    }

    ResolvedLocale {
        code: settings.default_locale().to_string(),
        source: LocaleSource::Default,
        discarded,
    }
}
