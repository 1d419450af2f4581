pub mod config;
pub mod error;
pub mod rules;

pub use config::{Config, LanguageEntry, default_config_path};
pub use error::{Result, RulesError};
pub use rules::{RuleEncoder, SymbolClass};
