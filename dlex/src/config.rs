//! Configuration module for the dlex CLI.
//!
//! Handles loading and saving `dlex.toml` and turning its `[keywords]`
//! table into a scanner keyword table.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use dragon_lex::{classify, Keywords, TokenKind};
use serde::{Deserialize, Serialize};

use crate::error::{DlexError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "dlex.toml";

/// Application configuration structure.
///
/// Every field has a default, so an empty file is a valid configuration.
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Print whitespace tokens as well.
    #[serde(default)]
    pub include_whitespace: bool,

    /// Output format, `text` or `json`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Append the byte range of each token to text output.
    #[serde(default)]
    pub show_spans: bool,

    /// Identifier spellings mapped to token kind names, e.g. `pos = "POS"`.
    #[serde(default)]
    pub keywords: BTreeMap<String, String>,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_whitespace: false,
            format: default_format(),
            show_spans: false,
            keywords: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/dlex/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("no configuration file found, using defaults");
                Ok(Self::default())
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DlexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| DlexError::Config(format!("Failed to parse configuration: {}", e)))?;

        tracing::debug!(path = %path.display(), keywords = config.keywords.len(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| DlexError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Builds the scanner keyword table from the `[keywords]` section.
    ///
    /// Kind names are matched case-insensitively against the printed token
    /// names (`POS`, `ge`, ...). A spelling must itself scan as a single
    /// identifier, otherwise the entry could never match.
    pub fn to_keywords(&self) -> Result<Keywords> {
        let mut keywords = Keywords::new();

        for (spelling, name) in &self.keywords {
            if !is_identifier(spelling) {
                return Err(DlexError::Config(format!(
                    "keyword `{}` is not an identifier",
                    spelling
                )));
            }

            let kind: TokenKind = name
                .parse()
                .map_err(|e| DlexError::Config(format!("keyword `{}`: {}", spelling, e)))?;

            keywords
                .insert(spelling.as_str(), kind)
                .map_err(|e| DlexError::Config(e.to_string()))?;
        }

        Ok(keywords)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("dlex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("dlex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

fn is_identifier(spelling: &str) -> bool {
    let mut chars = spelling.chars();
    chars.next().is_some_and(classify::is_alpha) && chars.all(classify::is_alphanumeric)
}
