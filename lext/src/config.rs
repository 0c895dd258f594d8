//! Configuration for the lext CLI.
//!
//! Settings come from a `lext.toml` file. Command-line flags override
//! whatever the file says.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{LextError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "lext.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Grammar used when `--grammar` is not given (`source` or `ir`).
    #[serde(default = "default_grammar")]
    pub grammar: String,

    /// Output format for `lext tokens` (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Worker threads for multi-file runs.
    #[serde(default = "default_jobs")]
    pub jobs: usize,

    /// Print token positions.
    #[serde(default)]
    pub show_spans: bool,
}

fn default_grammar() -> String {
    "source".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_jobs() -> usize {
    get_num_cpus()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grammar: default_grammar(),
            format: default_format(),
            jobs: default_jobs(),
            show_spans: false,
        }
    }
}

impl Config {
    /// Load configuration from the first standard location that has one:
    /// the current directory, `~/.config/lext/`, then the platform config
    /// directory. Falls back to defaults.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LextError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("lext").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
