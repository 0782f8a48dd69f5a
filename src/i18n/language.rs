// SPDX-License-Identifier: MPL-2.0
//! The closed set of languages the application ships tables for.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A supported display language.
///
/// English is the primary language: its table defines the key universe and
/// is consulted whenever the active language lacks a key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Somali,
    Spanish,
}

impl Language {
    /// Every supported language, in toggle order.
    pub const ALL: [Language; 3] = [Language::English, Language::Somali, Language::Spanish];

    /// The fallback language.
    pub const DEFAULT: Language = Language::English;

    /// ISO 639-1 code, also the name of the bundled table file.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Somali => "so",
            Language::Spanish => "es",
        }
    }

    /// The language's name written in that language, used on the toggle.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Somali => "Soomaali",
            Language::Spanish => "Español",
        }
    }

    /// Matches a bare language code, case-insensitively.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }

    /// Matches the primary language subtag of a parsed identifier, so
    /// `so-SO` and `es-419` map to their base language.
    #[must_use]
    pub fn from_langid(id: &LanguageIdentifier) -> Option<Self> {
        Self::from_code(id.language.as_str())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: LanguageIdentifier = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid language tag: {}", s))?;
        Self::from_langid(&id).ok_or_else(|| format!("unsupported language: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::DEFAULT, Language::English);
    }

    #[test]
    fn parses_region_tags_by_primary_subtag() {
        assert_eq!("so-SO".parse::<Language>(), Ok(Language::Somali));
        assert_eq!("es-419".parse::<Language>(), Ok(Language::Spanish));
        assert_eq!("en-US".parse::<Language>(), Ok(Language::English));
        assert_eq!("EN".parse::<Language>(), Ok(Language::English));
    }

    #[test]
    fn rejects_unsupported_and_malformed_tags() {
        assert!("fr".parse::<Language>().is_err());
        assert!("not a tag!".parse::<Language>().is_err());
    }

    #[test]
    fn native_names_are_distinct() {
        let names: Vec<_> = Language::ALL.iter().map(|l| l.native_name()).collect();
        assert_eq!(names, vec!["English", "Soomaali", "Español"]);
    }
}
