//! Postgres `tsvector` literal output for a [`TokenVector`].
//!
//! Each distinct token becomes one entry, `token:w1,w2`, listing every
//! distinct weight it was seen with. Entries keep the order in which their
//! token first appeared, and weights keep the order in which they first
//! appeared for that token, so the output is deterministic.
//!
//! ```text
//! [(KRM0,3) (KRM,2) (KR,1) (KRM,3) (KRM,2) (K,1)]  →  KRM0:3 KRM:2,3 KR:1 K:1
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::weighting::TokenVector;

/// Characters that force a lexeme to be single-quoted.
fn needs_quoting(token: &str) -> bool {
    token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '\\' | ':' | ','))
}

/// Quote a lexeme the way Postgres expects: wrap in `'...'`, double embedded
/// quotes and escape backslashes.
fn quote_lexeme(token: &str) -> String {
    if !needs_quoting(token) {
        return token.to_string();
    }
    let mut out = String::with_capacity(token.len() + 2);
    out.push('\'');
    for c in token.chars() {
        match c {
            '\'' => out.push_str("''"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Group tokens by spelling, preserving first-appearance order.
fn group(vector: &TokenVector) -> Vec<(&str, Vec<u8>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<u8>)> = Vec::new();

    for t in vector {
        let slot = *index.entry(t.token.as_str()).or_insert_with(|| {
            groups.push((t.token.as_str(), Vec::new()));
            groups.len() - 1
        });
        let weights = &mut groups[slot].1;
        if t.weight != 0 && !weights.contains(&t.weight) {
            weights.push(t.weight);
        }
    }

    groups
}

fn format_entry(token: &str, weights: &[u8]) -> String {
    let mut entry = quote_lexeme(token);
    if !weights.is_empty() {
        entry.push(':');
        let list: Vec<String> = weights.iter().map(u8::to_string).collect();
        entry.push_str(&list.join(","));
    }
    entry
}

impl TokenVector {
    /// One `tsvector` entry per distinct token.
    pub fn entries(&self) -> Vec<String> {
        group(self)
            .into_iter()
            .map(|(token, weights)| format_entry(token, &weights))
            .collect()
    }

    /// The full `tsvector` literal: entries joined by a single space.
    pub fn to_tsvector(&self) -> String {
        self.entries().join(" ")
    }
}

impl fmt::Display for TokenVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_tsvector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::KeySet;
    use crate::weighting::WeightedToken;

    fn vector(triples: &[(&str, &str, &str)]) -> TokenVector {
        let mut v = TokenVector::new();
        for (a, b, c) in triples {
            v.push_keys(KeySet::new(*a, *b, *c));
        }
        v
    }

    #[test]
    fn test_single_word() {
        let v = vector(&[("KRM0", "KRM", "KR")]);
        assert_eq!(v.to_tsvector(), "KRM0:3 KRM:2 KR:1");
    }

    #[test]
    fn test_same_token_different_weights_merge() {
        let v = vector(&[("KRM0", "KRM", "KR"), ("KRM", "KRM", "K")]);
        assert_eq!(v.entries(), vec!["KRM0:3", "KRM:2,3", "KR:1", "K:1"]);
    }

    #[test]
    fn test_repeated_pair_listed_once() {
        // Two different words landing on the same keys at the same weights.
        let v = vector(&[("A", "B", "C"), ("A", "B", "C")]);
        assert_eq!(v.to_tsvector(), "A:3 B:2 C:1");
    }

    #[test]
    fn test_equal_keys_within_one_word() {
        let v = vector(&[("A", "A", "A")]);
        assert_eq!(v.to_tsvector(), "A:3,2,1");
    }

    #[test]
    fn test_empty_vector_is_empty_string() {
        assert_eq!(TokenVector::new().to_tsvector(), "");
        assert!(TokenVector::new().entries().is_empty());
    }

    #[test]
    fn test_unweighted_token_has_no_suffix() {
        let v: TokenVector = vec![WeightedToken::new("KA", 0)].into();
        assert_eq!(v.to_tsvector(), "KA");
    }

    #[test]
    fn test_unweighted_then_weighted() {
        let v: TokenVector = vec![WeightedToken::new("KA", 0), WeightedToken::new("KA", 2)].into();
        assert_eq!(v.to_tsvector(), "KA:2");
    }

    #[test]
    fn test_empty_token_is_quoted() {
        let v = vector(&[("A", "", "")]);
        assert_eq!(v.to_tsvector(), "A:3 '':2,1");
    }

    #[test]
    fn test_special_characters_quoted() {
        let v: TokenVector = vec![
            WeightedToken::new("it's", 3),
            WeightedToken::new("a b", 2),
            WeightedToken::new("x:y", 1),
            WeightedToken::new(r"back\slash", 1),
        ]
        .into();
        assert_eq!(
            v.to_tsvector(),
            r"'it''s':3 'a b':2 'x:y':1 'back\\slash':1"
        );
    }

    #[test]
    fn test_display_matches_to_tsvector() {
        let v = vector(&[("KRM0", "KRM", "KR"), ("TL", "TL", "T")]);
        assert_eq!(v.to_string(), v.to_tsvector());
    }

    #[test]
    fn test_serialization_idempotent() {
        let v = vector(&[("B", "A", "C"), ("A", "C", "B")]);
        assert_eq!(v.to_tsvector(), v.to_tsvector());
        assert_eq!(v.to_tsvector(), "B:3,1 A:2,3 C:1,2");
    }
}
