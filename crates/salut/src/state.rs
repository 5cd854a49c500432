//! Application state shared across request handlers.
//!
//! Everything in here is built once at startup and shared read-only.
//! Handlers receive cheap clones; no locking is involved regardless of
//! how many requests run concurrently.

use std::sync::Arc;

use salut_core::{Settings, UserDirectory};

use crate::i18n::Catalog;

/// Shared application state.
///
/// This is cloned for each request handler. All fields are immutable after
/// startup, so clones are plain `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    /// Validated service settings (supported locales, defaults).
    pub settings: Arc<Settings>,
    /// Read-only user directory.
    pub directory: Arc<UserDirectory>,
    /// Fluent message catalog for the supported locales.
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates state from validated settings and a seeded directory.
    pub fn new(settings: Settings, directory: UserDirectory) -> Self {
        let catalog = Catalog::load(settings.default_locale());

        Self {
            settings: Arc::new(settings),
            directory: Arc::new(directory),
            catalog: Arc::new(catalog),
        }
    }

    /// State with the demo user directory and the stock settings, matching
    /// the sample deployment.
    #[cfg(test)]
    pub fn with_demo_data() -> Self {
        let settings = Settings::new(
            vec!["en".to_string(), "fr".to_string(), "am".to_string()],
            "en",
            "UTC",
        )
        .expect("demo settings are valid");

        Self::new(settings, crate::mock_data::demo_directory())
    }
}
