//! Fluent message catalog.
//!
//! Translation files are embedded at build time, one `.ftl` file per
//! locale. Lookups fall back to the default locale's bundle, then to a
//! visible `MISSING:` marker so untranslated keys show up in the page
//! instead of vanishing.

use std::collections::HashMap;

use fluent_bundle::{concurrent::FluentBundle, FluentArgs, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Translations;

pub struct Catalog {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    default_locale: Option<LanguageIdentifier>,
}

impl Catalog {
    /// Loads every embedded `.ftl` file into a bundle keyed by locale.
    ///
    /// Unparsable files are skipped with a warning rather than failing
    /// startup; the fallback chain covers the hole.
    pub fn load(default_locale: &str) -> Self {
        let mut bundles = HashMap::new();

        for file in Translations::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "Skipping translation file, bad locale name");
                continue;
            };
            let Some(content) = Translations::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    tracing::warn!(file = filename, ?errors, "Skipping unparsable translation file");
                    continue;
                }
            };

            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            // The output is plain text inside HTML; Unicode isolation marks
            // around placeables would leak into the page.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, ?errors, "Translation file has duplicate messages");
            }

            bundles.insert(locale, bundle);
        }

        let default_locale = default_locale.parse::<LanguageIdentifier>().ok();

        Self {
            bundles,
            default_locale,
        }
    }

    /// Formats `key` for `locale`, falling back to the default locale.
    pub fn translate(&self, locale: &str, key: &str, args: Option<&FluentArgs>) -> String {
        if let Ok(wanted) = locale.parse::<LanguageIdentifier>() {
            if let Some(value) = self.format(&wanted, key, args) {
                return value;
            }
        }
        if let Some(default) = &self.default_locale {
            if let Some(value) = self.format(default, key, args) {
                return value;
            }
        }
        format!("MISSING: {key}")
    }

    fn format(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(%locale, key, ?errors, "Fluent formatting errors");
        }

        Some(value.into_owned())
    }
}
