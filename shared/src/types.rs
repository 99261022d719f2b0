//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Display language of the storefront
///
/// Records carry a Finnish value in the plain field and the English one in
/// the `_en` sibling (`name` / `name_en`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fi,
    En,
}

impl Language {
    /// Pick the value for this language, falling back to Finnish when the
    /// English value is missing or blank.
    pub fn pick<'a>(self, fi: &'a str, en: Option<&'a str>) -> &'a str {
        match (self, en) {
            (Language::En, Some(en)) if !en.trim().is_empty() => en,
            _ => fi,
        }
    }

    /// Parse a language code (`fi`, `en`, `en-GB`, ...); unknown codes yield `None`
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "fi" => Some(Language::Fi),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Fi => write!(f, "fi"),
            Language::En => write!(f, "en"),
        }
    }
}
