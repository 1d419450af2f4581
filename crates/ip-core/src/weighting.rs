use serde::{Deserialize, Serialize};

use crate::constants::{PRIMARY_WEIGHT, SECONDARY_WEIGHT, TERTIARY_WEIGHT};
use crate::encoder::KeySet;

/// One phonetic key with its ranking weight.
///
/// 3 = primary, 2 = secondary, 1 = tertiary. 0 means "unweighted" and is
/// serialized without a weight suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedToken {
    pub token: String,
    pub weight: u8,
}

impl WeightedToken {
    pub fn new(token: impl Into<String>, weight: u8) -> Self {
        Self {
            token: token.into(),
            weight,
        }
    }
}

/// Weighted phonetic keys for a whole input string, in input order.
///
/// Repeated tokens are kept per occurrence; weights are never summed.
/// Serialization (grouping, weight lists) lives in [`crate::tsvector`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenVector {
    tokens: Vec<WeightedToken>,
}

impl TokenVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(words: usize) -> Self {
        Self {
            tokens: Vec::with_capacity(words * 3),
        }
    }

    /// Append the weighted triple for one word.
    ///
    /// Returns false (and appends nothing) when the word has no primary key.
    /// Empty secondary or tertiary keys are kept as empty tokens.
    pub fn push_keys(&mut self, keys: KeySet) -> bool {
        if keys.is_empty() {
            return false;
        }
        let KeySet {
            primary,
            secondary,
            tertiary,
        } = keys;
        self.tokens.push(WeightedToken::new(primary, PRIMARY_WEIGHT));
        self.tokens.push(WeightedToken::new(secondary, SECONDARY_WEIGHT));
        self.tokens.push(WeightedToken::new(tertiary, TERTIARY_WEIGHT));
        true
    }

    pub fn tokens(&self) -> &[WeightedToken] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeightedToken> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<WeightedToken>> for TokenVector {
    fn from(tokens: Vec<WeightedToken>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<WeightedToken> for TokenVector {
    fn from_iter<I: IntoIterator<Item = WeightedToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TokenVector {
    type Item = &'a WeightedToken;
    type IntoIter = std::slice::Iter<'a, WeightedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
