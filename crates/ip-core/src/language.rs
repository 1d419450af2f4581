use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A normalised language tag (`"kannada"`, `"malayalam"`, ...).
///
/// Tags are trimmed and ASCII-lowercased on construction, so `"Kannada "`
/// and `"kannada"` name the same language. Whether a tag is *supported*
/// depends on which encoders are registered with the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    pub const KANNADA: &'static str = "kannada";
    pub const MALAYALAM: &'static str = "malayalam";
    pub const ODIA: &'static str = "odia";

    pub fn new(tag: &str) -> Result<Self, Error> {
        let tag = tag.trim();
        if tag.is_empty() || tag.chars().any(char::is_whitespace) {
            return Err(Error::InvalidLanguageTag(tag.to_string()));
        }
        Ok(Self(tag.to_ascii_lowercase()))
    }

    pub fn kannada() -> Self {
        Self(Self::KANNADA.to_string())
    }

    pub fn malayalam() -> Self {
        Self(Self::MALAYALAM.to_string())
    }

    pub fn odia() -> Self {
        Self(Self::ODIA.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.0
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalises_case_and_whitespace() {
        let lang: Language = "  Kannada ".parse().unwrap();
        assert_eq!(lang, Language::kannada());
        assert_eq!(lang.as_str(), "kannada");
    }

    #[test]
    fn test_rejects_empty_tag() {
        assert_eq!(
            Language::new("   "),
            Err(Error::InvalidLanguageTag(String::new()))
        );
    }

    #[test]
    fn test_rejects_inner_whitespace() {
        assert!(matches!(
            Language::new("old kannada"),
            Err(Error::InvalidLanguageTag(_))
        ));
    }

    #[test]
    fn test_unknown_tag_is_still_a_valid_tag() {
        // Support is decided by the registry, not by the tag itself.
        assert_eq!(Language::new("klingon").unwrap().as_str(), "klingon");
    }

    #[test]
    fn test_serde_roundtrip_normalises() {
        let lang: Language = serde_json::from_str("\"ODIA\"").unwrap();
        assert_eq!(lang, Language::odia());
        assert_eq!(serde_json::to_string(&lang).unwrap(), "\"odia\"");
    }
}
