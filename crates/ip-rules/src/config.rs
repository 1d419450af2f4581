//! `indicphone` configuration: which rule file serves which language.
//!
//! ```toml
//! [languages.kannada]
//! rules = "kannada.toml"      # relative to the config file's directory
//!
//! [languages.odia]
//! rules = "/etc/indicphone/odia.toml"
//! enabled = false
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{env, fs};

use ip_core::{IndicPhone, Language};
use serde::Deserialize;

use crate::error::{Result, RulesError};
use crate::rules::RuleEncoder;

/// Env var naming the config file; overridden by an explicit path.
pub const CONFIG_ENV: &str = "INDICPHONE_CONFIG";

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// `~/.indicphone/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs_home().join(".indicphone").join("config.toml")
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageEntry {
    /// Rule file path as written in the config.
    pub rules: PathBuf,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    languages: BTreeMap<String, LanguageEntry>,
    /// Directory relative rule paths resolve against.
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    pub fn from_toml_str(content: &str, base_dir: &Path) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.base_dir = base_dir.to_path_buf();
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RulesError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_toml_str(&content, base_dir)
    }

    /// Resolve and load the active config.
    ///
    /// Priority: explicit path > `INDICPHONE_CONFIG` > default location.
    /// A missing file is an error when it was named explicitly (flag or env),
    /// and an empty config when it is only the default.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let path = default_config_path();
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::debug!("no config at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Enabled languages with their rule paths resolved against the config
    /// directory, in tag order.
    pub fn languages(&self) -> Result<Vec<(Language, PathBuf)>> {
        let mut resolved: BTreeMap<Language, PathBuf> = BTreeMap::new();
        for (tag, entry) in &self.languages {
            if !entry.enabled {
                tracing::debug!("language '{tag}' disabled, skipping");
                continue;
            }
            let lang = Language::new(tag)?;
            let path = if entry.rules.is_absolute() {
                entry.rules.clone()
            } else {
                self.base_dir.join(&entry.rules)
            };
            if let Some(previous) = resolved.insert(lang.clone(), path) {
                tracing::warn!(
                    "language '{lang}' configured more than once, dropping {}",
                    previous.display()
                );
            }
        }
        Ok(resolved.into_iter().collect())
    }

    pub fn entry(&self, tag: &str) -> Option<&LanguageEntry> {
        self.languages.get(tag)
    }

    /// Load every enabled rule file and register it with a new tokenizer.
    pub fn build_tokenizer(&self) -> Result<IndicPhone> {
        let mut builder = IndicPhone::builder();
        for (lang, path) in self.languages()? {
            let encoder = RuleEncoder::from_path(&path)?;
            if let Some(declared) = encoder.language()
                && !declared.eq_ignore_ascii_case(lang.as_str())
            {
                tracing::warn!(
                    "{} declares language '{declared}' but is registered for '{lang}'",
                    path.display()
                );
            }
            tracing::info!("registered language '{lang}' from {}", path.display());
            builder = builder.register(lang, encoder);
        }
        Ok(builder.build())
    }
}
