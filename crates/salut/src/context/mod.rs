//! Request-scoped context module.
//!
//! Provides the `RequestContext` extractor that resolves, once per
//! request, the active user, the display locale, the display timezone,
//! and the formatted current time. Complements application-scoped
//! `AppState`.

mod extractor;
mod types;

pub use types::RequestContext;
