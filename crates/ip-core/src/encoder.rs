/// The three phonetic keys an encoder derives for one word.
///
/// `primary` is the most sound-accurate key, `tertiary` the most relaxed.
/// An empty `primary` means the word has no phonetic representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeySet {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

impl KeySet {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        tertiary: impl Into<String>,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            tertiary: tertiary.into(),
        }
    }

    /// True when the word carries no phonetic signal.
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }
}

/// A per-language phonetic algorithm.
///
/// Implementations must be deterministic and side-effect free: the same word
/// always yields the same keys, and a single instance is shared by every
/// caller for the lifetime of the process. Words that cannot be encoded
/// return an empty [`KeySet`] rather than an error.
pub trait PhoneticEncoder: Send + Sync {
    fn encode(&self, word: &str) -> KeySet;
}

impl<F> PhoneticEncoder for F
where
    F: Fn(&str) -> KeySet + Send + Sync,
{
    fn encode(&self, word: &str) -> KeySet {
        self(word)
    }
}
