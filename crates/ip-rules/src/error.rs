use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RulesError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Regex(regex::Error),
    /// An explicitly requested file does not exist.
    NotFound(PathBuf),
    /// A rule table entry that cannot be used.
    InvalidRule(String),
    Language(ip_core::Error),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::Io(e) => write!(f, "I/O error: {e}"),
            RulesError::Toml(e) => write!(f, "invalid TOML: {e}"),
            RulesError::Regex(e) => write!(f, "invalid rewrite pattern: {e}"),
            RulesError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            RulesError::InvalidRule(msg) => write!(f, "invalid rule: {msg}"),
            RulesError::Language(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RulesError::Io(e) => Some(e),
            RulesError::Toml(e) => Some(e),
            RulesError::Regex(e) => Some(e),
            RulesError::Language(e) => Some(e),
            RulesError::NotFound(_) | RulesError::InvalidRule(_) => None,
        }
    }
}

impl From<std::io::Error> for RulesError {
    fn from(e: std::io::Error) -> Self {
        RulesError::Io(e)
    }
}

impl From<toml::de::Error> for RulesError {
    fn from(e: toml::de::Error) -> Self {
        RulesError::Toml(e)
    }
}

impl From<regex::Error> for RulesError {
    fn from(e: regex::Error) -> Self {
        RulesError::Regex(e)
    }
}

impl From<ip_core::Error> for RulesError {
    fn from(e: ip_core::Error) -> Self {
        RulesError::Language(e)
    }
}

pub type Result<T> = std::result::Result<T, RulesError>;
