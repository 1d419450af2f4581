use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::constants::WORD_SEPARATOR;
use crate::encoder::PhoneticEncoder;
use crate::error::{Error, Result};
use crate::language::Language;
use crate::query::build_query;
use crate::weighting::TokenVector;

/// A text → search-token strategy a host application can hold behind
/// `dyn Tokenizer`.
///
/// `to_tokens` produces the `tsvector` entries for indexing, `to_query`
/// the `tsquery` expression for searching.
pub trait Tokenizer: Send + Sync {
    fn name(&self) -> &str;

    fn to_tokens(&self, text: &str, lang: &str) -> Result<Vec<String>>;

    fn to_query(&self, text: &str, lang: &str) -> Result<String>;
}

/// Phonetic tokenizer for Indian languages, similar in spirit to Metaphone
/// for English.
///
/// Holds one read-only encoder per language. Cheap to clone and safe to
/// share across threads.
#[derive(Clone, Default)]
pub struct IndicPhone {
    encoders: BTreeMap<Language, Arc<dyn PhoneticEncoder>>,
}

impl IndicPhone {
    pub const NAME: &'static str = "indicphone";

    pub fn builder() -> IndicPhoneBuilder {
        IndicPhoneBuilder::default()
    }

    /// Registered languages in tag order.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.encoders.keys()
    }

    pub fn supports(&self, tag: &str) -> bool {
        self.encoder(tag).is_ok()
    }

    /// Look up the encoder for a tag. Unknown, empty or malformed tags are
    /// all reported as unsupported.
    pub fn encoder(&self, tag: &str) -> Result<&dyn PhoneticEncoder> {
        let unsupported = || Error::UnsupportedLanguage(tag.trim().to_string());
        let lang = Language::new(tag).map_err(|_| unsupported())?;
        self.encoders
            .get(&lang)
            .map(|enc| &**enc)
            .ok_or_else(unsupported)
    }

    /// Weighted phonetic keys for every space-separated word of `text`.
    ///
    /// Each encodable word contributes its keys at weights 3, 2, 1. Words
    /// with no primary key (empty chunks, numerals, punctuation) contribute
    /// nothing, so an all-unencodable input gives an empty vector, not an
    /// error.
    pub fn tokenize(&self, text: &str, tag: &str) -> Result<TokenVector> {
        let encoder = self.encoder(tag)?;
        let chunks: Vec<&str> = text.split(WORD_SEPARATOR).collect();

        let mut vector = TokenVector::with_capacity(chunks.len());
        for chunk in chunks {
            vector.push_keys(encoder.encode(chunk));
        }
        Ok(vector)
    }

    /// `tsquery` expression for `text`, encoded as a single phrase.
    ///
    /// An empty string means "match nothing".
    pub fn query(&self, text: &str, tag: &str) -> Result<String> {
        let encoder = self.encoder(tag)?;
        Ok(build_query(&encoder.encode(text)))
    }
}

impl Tokenizer for IndicPhone {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn to_tokens(&self, text: &str, lang: &str) -> Result<Vec<String>> {
        self.tokenize(text, lang).map(|v| v.entries())
    }

    fn to_query(&self, text: &str, lang: &str) -> Result<String> {
        self.query(text, lang)
    }
}

impl fmt::Debug for IndicPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicPhone")
            .field("languages", &self.encoders.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Collects `(language, encoder)` pairs before freezing them into an
/// [`IndicPhone`]. Registering a tag twice replaces the earlier encoder.
#[derive(Default)]
pub struct IndicPhoneBuilder {
    encoders: BTreeMap<Language, Arc<dyn PhoneticEncoder>>,
}

impl IndicPhoneBuilder {
    pub fn register(mut self, lang: Language, encoder: impl PhoneticEncoder + 'static) -> Self {
        self.encoders.insert(lang, Arc::new(encoder));
        self
    }

    pub fn build(self) -> IndicPhone {
        IndicPhone {
            encoders: self.encoders,
        }
    }
}
