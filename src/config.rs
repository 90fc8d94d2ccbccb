/// Configuration for cmd-advisor
///
/// Read from `~/.cmd-advisor/config.toml` unless another file is given.
/// Every key is optional; a missing file means all defaults.

use crate::advisor::{MAX_FUZZY_LEN, MIN_FUZZY_LEN};
use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = ".cmd-advisor";
const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "commands.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the command index lives
    pub database_path: PathBuf,
    /// Shortest word that gets misspelling lookups
    pub min_fuzzy_len: usize,
    /// Longest word that gets misspelling lookups
    pub max_fuzzy_len: usize,
    /// `tracing` filter used when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        let app_dir = app_dir().unwrap_or_else(|| PathBuf::from(APP_DIR));
        Self {
            database_path: app_dir.join(DATABASE_FILE),
            min_fuzzy_len: MIN_FUZZY_LEN,
            max_fuzzy_len: MAX_FUZZY_LEN,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load from `path`, or the default location when `None`
    ///
    /// A missing file at the default location is not an error. A missing
    /// file that was asked for explicitly is.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.min_fuzzy_len > self.max_fuzzy_len {
            return Err(AdvisorError::Config(format!(
                "min_fuzzy_len ({}) is larger than max_fuzzy_len ({})",
                self.min_fuzzy_len, self.max_fuzzy_len
            )));
        }
        Ok(())
    }
}

fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR))
}

/// `~/.cmd-advisor/config.toml`, if there is a home directory
pub fn default_config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(CONFIG_FILE))
}
