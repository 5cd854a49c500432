//! Display-locale selection.
//!
//! A request can name a locale four ways: the `locale` query parameter,
//! the logged-in user's stored preference, a verbatim `Accept-Language`
//! value, or weighted `Accept-Language` negotiation. `resolve_locale`
//! walks that chain in priority order and records what it had to throw
//! away on the way down.

mod negotiate;
mod resolve;

pub use negotiate::{negotiate, parse_accept_language, LanguageRange};
pub use resolve::{resolve_locale, LocaleDiscard, LocaleInputs, LocaleSource, ResolvedLocale};
