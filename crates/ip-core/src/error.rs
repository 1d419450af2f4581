use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No encoder is registered for this language tag.
    UnsupportedLanguage(String),
    /// The language tag was empty or contained whitespace.
    InvalidLanguageTag(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedLanguage(tag) => write!(f, "unknown language to tokenize: '{tag}'"),
            Error::InvalidLanguageTag(tag) => write!(f, "invalid language tag: '{tag}'"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
