//! Table-driven phonetic encoder.
//!
//! A rule file maps script symbols to phonetic key fragments and tags each
//! symbol with a class. The three keys of a word are projections of the same
//! symbol sequence:
//!
//! - primary: every matched symbol
//! - secondary: everything except `modifier` symbols
//! - tertiary: `consonant` symbols only, adjacent repeats collapsed
//!
//! Optional regex rewrites run first, over the whole word. Their output is
//! scanned against the symbol table like any other text.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use ip_core::{KeySet, PhoneticEncoder};
use regex::Regex;
use serde::Deserialize;

use crate::error::{Result, RulesError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolClass {
    Consonant,
    Vowel,
    VowelSign,
    Modifier,
}

#[derive(Debug, Clone, Deserialize)]
struct Symbol {
    key: String,
    class: SymbolClass,
}

#[derive(Debug, Deserialize)]
struct Rewrite {
    pattern: String,
    replace: String,
}

fn default_lowercase() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RuleFile {
    language: Option<String>,
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    #[serde(default)]
    rewrite: Vec<Rewrite>,
    #[serde(default)]
    symbols: BTreeMap<String, Symbol>,
}

/// A [`PhoneticEncoder`] built from a TOML rule table.
#[derive(Debug, Clone)]
pub struct RuleEncoder {
    language: Option<String>,
    lowercase: bool,
    rewrites: Vec<(Regex, String)>,
    symbols: HashMap<String, Symbol>,
    /// Longest symbol, in chars. Bounds the longest-match scan.
    max_symbol_len: usize,
}

impl RuleEncoder {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RuleFile = toml::from_str(content)?;
        Self::from_rule_file(file)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RulesError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let encoder = Self::from_toml_str(&content)?;
        tracing::debug!(
            "loaded {} symbols, {} rewrites from {}",
            encoder.symbol_count(),
            encoder.rewrite_count(),
            path.display()
        );
        Ok(encoder)
    }

    fn from_rule_file(file: RuleFile) -> Result<Self> {
        let mut rewrites = Vec::with_capacity(file.rewrite.len());
        for rw in file.rewrite {
            if rw.pattern.is_empty() {
                return Err(RulesError::InvalidRule("empty rewrite pattern".into()));
            }
            rewrites.push((Regex::new(&rw.pattern)?, rw.replace));
        }

        let mut symbols = HashMap::with_capacity(file.symbols.len());
        let mut max_symbol_len = 0;
        for (text, symbol) in file.symbols {
            if text.is_empty() {
                return Err(RulesError::InvalidRule("empty symbol".into()));
            }
            if symbol.key.chars().any(char::is_whitespace) {
                return Err(RulesError::InvalidRule(format!(
                    "key for '{text}' contains whitespace"
                )));
            }
            let text = if file.lowercase {
                text.to_lowercase()
            } else {
                text
            };
            max_symbol_len = max_symbol_len.max(text.chars().count());
            if symbols.contains_key(&text) {
                return Err(RulesError::InvalidRule(format!(
                    "duplicate symbol '{text}' after lowercasing"
                )));
            }
            symbols.insert(text, symbol);
        }

        Ok(Self {
            language: file.language,
            lowercase: file.lowercase,
            rewrites,
            symbols,
            max_symbol_len,
        })
    }

    /// The `language` declared inside the rule file, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn rewrite_count(&self) -> usize {
        self.rewrites.len()
    }

    fn normalise(&self, word: &str) -> String {
        let mut text = if self.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        for (re, replace) in &self.rewrites {
            text = re.replace_all(&text, replace.as_str()).into_owned();
        }
        // Rewrite output is matched against the same lowercased table.
        if self.lowercase {
            text = text.to_lowercase();
        }
        text
    }

    /// Longest-match scan. Characters matching no symbol are skipped.
    fn scan(&self, text: &str) -> Vec<&Symbol> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = Vec::new();
        let mut i = 0;
        let mut candidate = String::new();

        while i < chars.len() {
            let longest = self.max_symbol_len.min(chars.len() - i);
            let mut advanced = false;
            for len in (1..=longest).rev() {
                candidate.clear();
                candidate.extend(&chars[i..i + len]);
                if let Some(sym) = self.symbols.get(&candidate) {
                    out.push(sym);
                    i += len;
                    advanced = true;
                    break;
                }
            }
            if !advanced {
                i += 1;
            }
        }
        out
    }
}

impl PhoneticEncoder for RuleEncoder {
    fn encode(&self, word: &str) -> KeySet {
        let text = self.normalise(word);
        let symbols = self.scan(&text);

        let mut keys = KeySet::default();
        let mut last_consonant: Option<&str> = None;
        for sym in symbols {
            keys.primary.push_str(&sym.key);
            match sym.class {
                SymbolClass::Modifier => {}
                SymbolClass::Consonant => {
                    keys.secondary.push_str(&sym.key);
                    if last_consonant != Some(sym.key.as_str()) {
                        keys.tertiary.push_str(&sym.key);
                    }
                    last_consonant = Some(&sym.key);
                }
                SymbolClass::Vowel | SymbolClass::VowelSign => {
                    keys.secondary.push_str(&sym.key);
                }
            }
        }

        if keys.primary.is_empty() {
            return KeySet::default();
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LATIN: &str = r#"
language = "test"

[[rewrite]]
pattern = "ph"
replace = "f"

[symbols]
"k"  = { key = "K", class = "consonant" }
"kh" = { key = "K", class = "consonant" }
"r"  = { key = "R", class = "consonant" }
"m"  = { key = "M", class = "consonant" }
"f"  = { key = "F", class = "consonant" }
"a"  = { key = "A", class = "vowel" }
"aa" = { key = "A", class = "vowel" }
"n"  = { key = "N", class = "modifier" }
"#;

    fn encoder() -> RuleEncoder {
        RuleEncoder::from_toml_str(LATIN).unwrap()
    }

    #[test]
    fn test_three_projections() {
        let keys = encoder().encode("karman");
        assert_eq!(keys, KeySet::new("KARMAN", "KARMA", "KRM"));
    }

    #[test]
    fn test_longest_match_wins() {
        // "kh" is one symbol, not "k" + unknown "h".
        assert_eq!(encoder().encode("khaa").primary, "KA");
    }

    #[test]
    fn test_adjacent_consonants_collapse_in_tertiary() {
        let keys = encoder().encode("kkhar");
        assert_eq!(keys.primary, "KKAR");
        assert_eq!(keys.tertiary, "KR");
    }

    #[test]
    fn test_rewrites_run_first() {
        assert_eq!(encoder().encode("pharm").primary, "FARM");
    }

    #[test]
    fn test_lowercases_input() {
        assert_eq!(encoder().encode("KARMA"), encoder().encode("karma"));
    }

    #[test]
    fn test_unknown_characters_skipped() {
        assert_eq!(encoder().encode("k-a-r"), KeySet::new("KAR", "KAR", "KR"));
    }

    #[test]
    fn test_unencodable_word_is_empty() {
        assert!(encoder().encode("123").is_empty());
        assert!(encoder().encode("").is_empty());
    }

    #[test]
    fn test_vowel_only_word_has_empty_tertiary() {
        assert_eq!(encoder().encode("aa"), KeySet::new("A", "A", ""));
    }

    #[test]
    fn test_counts_and_language() {
        let enc = encoder();
        assert_eq!(enc.language(), Some("test"));
        assert_eq!(enc.symbol_count(), 8);
        assert_eq!(enc.rewrite_count(), 1);
    }

    #[test]
    fn test_case_sensitive_table() {
        let enc = RuleEncoder::from_toml_str(
            r#"
lowercase = false
[symbols]
"T" = { key = "TT", class = "consonant" }
"t" = { key = "T", class = "consonant" }
"#,
        )
        .unwrap();
        assert_eq!(enc.encode("Tt").primary, "TTT");
    }

    #[test]
    fn test_indic_script() {
        let enc = RuleEncoder::from_toml_str(
            r#"
[symbols]
"ಕ" = { key = "K", class = "consonant" }
"ರ" = { key = "R", class = "consonant" }
"ಮ" = { key = "M", class = "consonant" }
"್" = { key = "", class = "vowel_sign" }
"ಾ" = { key = "A", class = "vowel_sign" }
"ಂ" = { key = "M", class = "modifier" }
"#,
        )
        .unwrap();
        assert_eq!(enc.encode("ಕರ್ಮಾಂ"), KeySet::new("KRMAM", "KRMA", "KRM"));
    }

    #[test]
    fn test_uppercase_rewrite_output_matches_symbols() {
        let enc = RuleEncoder::from_toml_str(
            r#"
[[rewrite]]
pattern = "x"
replace = "KSH"

[symbols]
"KSH" = { key = "X", class = "consonant" }
"a"   = { key = "A", class = "vowel" }
"#,
        )
        .unwrap();
        assert_eq!(enc.encode("xa"), KeySet::new("XA", "XA", "X"));
    }

    #[test]
    fn test_rejects_symbols_colliding_after_lowercasing() {
        let err = RuleEncoder::from_toml_str(
            r#"
[symbols]
"T" = { key = "TT", class = "consonant" }
"t" = { key = "T", class = "consonant" }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::InvalidRule(msg) if msg.contains("duplicate symbol 't'")));
    }

    #[test]
    fn test_rejects_empty_symbol() {
        let err = RuleEncoder::from_toml_str(
            r#"
[symbols]
"" = { key = "K", class = "consonant" }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::InvalidRule(_)));
    }

    #[test]
    fn test_rejects_whitespace_in_key() {
        let err = RuleEncoder::from_toml_str(
            r#"
[symbols]
"k" = { key = "K K", class = "consonant" }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::InvalidRule(_)));
    }

    #[test]
    fn test_rejects_bad_regex() {
        let err = RuleEncoder::from_toml_str(
            r#"
[[rewrite]]
pattern = "("
replace = ""
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::Regex(_)));
    }

    #[test]
    fn test_rejects_unknown_class() {
        let err = RuleEncoder::from_toml_str(
            r#"
[symbols]
"k" = { key = "K", class = "click" }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, RulesError::Toml(_)));
    }

    #[test]
    fn test_from_path_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = RuleEncoder::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, RulesError::NotFound(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("latin.toml");
        std::fs::write(&path, LATIN).unwrap();
        let enc = RuleEncoder::from_path(&path).unwrap();
        assert_eq!(enc.encode("karma").tertiary, "KRM");
    }
}
