// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Every user-visible string goes through [`I18n`], which pairs the bundled
//! [`Catalog`] with the currently selected [`Language`].
//!
//! # Features
//!
//! - Startup language detection from CLI, config, or system settings
//! - Embedded TOML translation tables (English, Somali, Spanish)
//! - Runtime language switching
//! - Fallback to English, then to the raw key, when a translation is missing
//! - `{name}` placeholder interpolation

pub mod catalog;
pub mod language;

pub use catalog::{interpolate, Catalog, LanguageCoverage, TranslationTable};
pub use language::Language;

use crate::config::Config;
use std::sync::Arc;

/// Translation entry point bound to the active language.
#[derive(Debug, Clone)]
pub struct I18n {
    catalog: Arc<Catalog>,
    current: Language,
}

impl Default for I18n {
    fn default() -> Self {
        Self::with_catalog(Catalog::shared(), Language::DEFAULT)
    }
}

impl I18n {
    /// Builds the translator over the bundled tables, picking the starting
    /// language from the CLI flag, the config file, or the OS locale.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let language = resolve_language(
            cli_lang.as_deref(),
            config.general.language.as_deref(),
            sys_locale::get_locale().as_deref(),
        )
        .unwrap_or_default();
        tracing::debug!(%language, "selected startup language");
        Self::with_catalog(Catalog::shared(), language)
    }

    #[must_use]
    pub fn with_catalog(catalog: Arc<Catalog>, language: Language) -> Self {
        Self {
            catalog,
            current: language,
        }
    }

    #[must_use]
    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tr(&self, key: &str) -> String {
        self.catalog.resolve(self.current, key, &[])
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let replacements: Vec<(&str, Option<&str>)> =
            args.iter().map(|(name, value)| (*name, Some(*value))).collect();
        self.catalog.resolve(self.current, key, &replacements)
    }

    /// Like [`tr_with_args`](Self::tr_with_args), but a `None` value expands
    /// to the empty string.
    pub fn tr_with_optional_args(&self, key: &str, args: &[(&str, Option<&str>)]) -> String {
        self.catalog.resolve(self.current, key, args)
    }
}

/// Picks the first candidate tag that names a supported language.
fn resolve_language(
    cli_lang: Option<&str>,
    config_lang: Option<&str>,
    os_locale: Option<&str>,
) -> Option<Language> {
    [cli_lang, config_lang, os_locale]
        .into_iter()
        .flatten()
        .find_map(|tag| tag.parse::<Language>().ok())
}
