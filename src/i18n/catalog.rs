// SPDX-License-Identifier: MPL-2.0
//! Translation tables and the key resolver.
//!
//! A [`Catalog`] holds one flat table per [`Language`], each mapping a
//! symbolic key to a template string such as `"by {author}"`. Tables are
//! bundled as TOML files under `assets/i18n/` and parsed once at startup.
//!
//! Resolution never fails. A key is looked up in the requested language,
//! then in [`Language::DEFAULT`], and finally the key itself is returned so
//! the UI always has something to show.

use super::language::Language;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Key to template mapping for a single language.
pub type TranslationTable = BTreeMap<String, String>;

/// Immutable set of translation tables, one per language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: HashMap<Language, TranslationTable>,
}

/// How much of the default key universe a language covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCoverage {
    pub language: Language,
    pub total_keys: usize,
    pub missing: Vec<String>,
}

impl LanguageCoverage {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Share of default keys present, in `[0, 100]`.
    #[must_use]
    pub fn percent(&self) -> f32 {
        if self.total_keys == 0 {
            return 100.0;
        }
        let present = self.total_keys - self.missing.len();
        present as f32 * 100.0 / self.total_keys as f32
    }
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the table for `language`.
    #[must_use]
    pub fn with_table(mut self, language: Language, table: TranslationTable) -> Self {
        self.tables.insert(language, table);
        self
    }

    /// Parses a flat TOML document of `key = "template"` pairs.
    pub fn parse_table(language: Language, source: &str) -> Result<TranslationTable> {
        toml::from_str::<TranslationTable>(source).map_err(|err| Error::Translation {
            language: language.code().to_string(),
            message: err.to_string(),
        })
    }

    /// Builds a catalog from TOML sources, failing on the first bad table.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Language, &'a str)>,
    {
        let mut catalog = Self::new();
        for (language, source) in sources {
            let table = Self::parse_table(language, source)?;
            catalog.tables.insert(language, table);
        }
        Ok(catalog)
    }

    /// Loads the tables bundled into the binary.
    ///
    /// A table that is missing or fails to parse is logged and skipped;
    /// lookups for that language then fall through to the default table.
    #[must_use]
    pub fn embedded() -> Self {
        let mut catalog = Self::new();
        for language in Language::ALL {
            let file_name = format!("{}.toml", language.code());
            let Some(file) = Asset::get(&file_name) else {
                tracing::warn!(language = %language, "no bundled translation table");
                continue;
            };
            let source = String::from_utf8_lossy(file.data.as_ref());
            match Self::parse_table(language, &source) {
                Ok(table) => {
                    tracing::debug!(language = %language, keys = table.len(), "loaded translations");
                    catalog.tables.insert(language, table);
                }
                Err(err) => tracing::error!(%err, "skipping translation table"),
            }
        }
        catalog
    }

    /// Process-wide bundled catalog, parsed on first use.
    #[must_use]
    pub fn shared() -> Arc<Catalog> {
        static EMBEDDED: OnceLock<Arc<Catalog>> = OnceLock::new();
        EMBEDDED
            .get_or_init(|| Arc::new(Catalog::embedded()))
            .clone()
    }

    /// Returns whether a table is loaded for `language`.
    #[must_use]
    pub fn has_language(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    /// Looks `key` up in a single table. Empty templates count as absent.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .filter(|template| !template.is_empty())
    }

    /// Returns the template for `key`, following the fallback chain:
    /// requested language, default language, then the key itself.
    #[must_use]
    pub fn template<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.lookup(language, key)
            .or_else(|| self.lookup(Language::DEFAULT, key))
            .unwrap_or(key)
    }

    /// Resolves `key` for `language` and expands `replacements` into it.
    ///
    /// A `None` value expands to the empty string. Placeholders with no
    /// matching replacement are kept verbatim.
    #[must_use]
    pub fn resolve(
        &self,
        language: Language,
        key: &str,
        replacements: &[(&str, Option<&str>)],
    ) -> String {
        interpolate(self.template(language, key), replacements)
    }

    /// Keys of the default table, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tables
            .get(&Language::DEFAULT)
            .into_iter()
            .flat_map(|table| table.keys().map(String::as_str))
    }

    /// Per-language coverage of the default key universe.
    #[must_use]
    pub fn coverage(&self) -> Vec<LanguageCoverage> {
        let universe: Vec<&str> = self.keys().collect();
        Language::ALL
            .into_iter()
            .map(|language| LanguageCoverage {
                language,
                total_keys: universe.len(),
                missing: universe
                    .iter()
                    .filter(|key| self.lookup(language, key).is_none())
                    .map(|key| (*key).to_string())
                    .collect(),
            })
            .collect()
    }
}

/// Replaces every `{name}` in `template`, one replacement at a time in the
/// order given.
#[must_use]
pub fn interpolate(template: &str, replacements: &[(&str, Option<&str>)]) -> String {
    let mut output = template.to_string();
    for (name, value) in replacements {
        let placeholder = format!("{{{}}}", name);
        if output.contains(&placeholder) {
            output = output.replace(&placeholder, value.unwrap_or(""));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, &str)]) -> TranslationTable {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_table(
                Language::English,
                table(&[
                    ("byAuthor", "by {author}"),
                    ("cancel", "Cancel"),
                    ("onlyEnglish", "Only in English"),
                ]),
            )
            .with_table(
                Language::Spanish,
                table(&[("byAuthor", "por {author}"), ("cancel", "Cancelar")]),
            )
            .with_table(Language::Somali, table(&[("cancel", "")]))
    }

    #[test]
    fn active_language_wins() {
        let catalog = sample_catalog();
        assert_eq!(catalog.resolve(Language::Spanish, "cancel", &[]), "Cancelar");
    }

    #[test]
    fn falls_back_to_default_language() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.resolve(Language::Spanish, "onlyEnglish", &[]),
            "Only in English"
        );
    }

    #[test]
    fn empty_template_counts_as_missing() {
        let catalog = sample_catalog();
        assert_eq!(catalog.resolve(Language::Somali, "cancel", &[]), "Cancel");
    }

    #[test]
    fn unknown_key_is_returned_verbatim() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.resolve(Language::Spanish, "noSuchKey", &[]),
            "noSuchKey"
        );
    }

    #[test]
    fn missing_language_table_uses_default() {
        let catalog = Catalog::new().with_table(Language::English, table(&[("cancel", "Cancel")]));
        assert!(!catalog.has_language(Language::Somali));
        assert_eq!(catalog.resolve(Language::Somali, "cancel", &[]), "Cancel");
    }

    #[test]
    fn interpolation_expands_every_occurrence() {
        let out = interpolate("{a} and {a} again", &[("a", Some("x"))]);
        assert_eq!(out, "x and x again");
    }

    #[test]
    fn interpolation_keeps_unmatched_placeholders() {
        let out = interpolate("{author} met {name}", &[("author", Some("Amina"))]);
        assert_eq!(out, "Amina met {name}");
    }

    #[test]
    fn none_value_expands_to_empty() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.resolve(Language::English, "byAuthor", &[("author", None)]),
            "by "
        );
    }

    #[test]
    fn empty_value_expands_to_empty() {
        assert_eq!(interpolate("by {author}", &[("author", Some(""))]), "by ");
    }

    #[test]
    fn replacements_apply_in_order() {
        let out = interpolate("{a}", &[("a", Some("{b}")), ("b", Some("done"))]);
        assert_eq!(out, "done");
    }

    #[test]
    fn parse_table_reports_language_on_error() {
        let err = Catalog::parse_table(Language::Somali, "broken = ").unwrap_err();
        assert!(matches!(err, Error::Translation { ref language, .. } if language == "so"));
    }

    #[test]
    fn from_sources_builds_all_tables() {
        let catalog = Catalog::from_sources([
            (Language::English, "hello = \"Hello\""),
            (Language::Spanish, "hello = \"Hola\""),
        ])
        .expect("valid sources");
        assert_eq!(catalog.resolve(Language::Spanish, "hello", &[]), "Hola");
        assert!(!catalog.has_language(Language::Somali));
    }

    #[test]
    fn coverage_lists_missing_keys() {
        let catalog = sample_catalog();
        let coverage = catalog.coverage();
        let spanish = coverage
            .iter()
            .find(|c| c.language == Language::Spanish)
            .expect("spanish coverage");
        assert_eq!(spanish.total_keys, 3);
        assert_eq!(spanish.missing, vec!["onlyEnglish".to_string()]);
        assert!(!spanish.is_complete());
        assert!(spanish.percent() > 66.0 && spanish.percent() < 67.0);
    }

    #[test]
    fn embedded_tables_cover_every_key() {
        let catalog = Catalog::embedded();
        for language in Language::ALL {
            assert!(catalog.has_language(language), "{language} table missing");
        }
        for coverage in catalog.coverage() {
            assert!(
                coverage.is_complete(),
                "{} is missing {:?}",
                coverage.language,
                coverage.missing
            );
        }
    }
}
