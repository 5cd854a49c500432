//! Pure types for request-scoped context.

use salut_core::directory::UserRecord;
use salut_core::locale::ResolvedLocale;
use salut_core::timezone::ResolvedTimezone;
use uuid::Uuid;

/// Unique identifier for a request, used for tracing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context available to all handlers.
///
/// Everything a handler needs to localize the response: the optional
/// user, the resolved locale and timezone with their provenance, and the
/// current time already formatted for display. Discarded by the time the
/// response is written; nothing here outlives the request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// User selected via `login_as` (None when anonymous or unknown).
    pub user: Option<UserRecord>,
    /// Outcome of the locale fallback chain.
    pub locale: ResolvedLocale,
    /// Outcome of the timezone fallback chain.
    pub timezone: ResolvedTimezone,
    /// Wall-clock "now", formatted for the resolved locale and timezone.
    pub current_time: String,
    /// Unique request identifier for tracing.
    pub request_id: RequestId,
}

impl RequestContext {
    /// The resolved locale code.
    pub fn locale_code(&self) -> &str {
        &self.locale.code
    }
}
