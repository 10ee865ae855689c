//! Configuration management and validation.
//!
//! Settings layer in the usual order: built-in defaults, then an optional
//! TOML config file, then explicit CLI overrides applied by the commands.
//! Collaborators receive the sections they need as parameters; nothing
//! reads configuration through global state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::constants::{
    BULLETIN_PAGE_URL, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::{Error, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Bulletin page and HTTP settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Bulletin page listing the weekly workbook downloads
    pub page_url: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_url: BULLETIN_PAGE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory of the year/month report tree
    pub output_dir: PathBuf,

    /// Pretty-print report JSON
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pretty_json: true,
        }
    }
}

impl Config {
    /// Default config file location, `~/.config/oil-bulletin/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oil-bulletin").join("config.toml"))
    }

    /// Load configuration from an explicit file, or from the default
    /// location when it exists, or fall back to defaults
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let path = match config_file {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_config_path().filter(|p| p.exists()),
        };

        let config = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                let content = fs::read_to_string(&path)
                    .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
                toml::from_str(&content).map_err(|e| {
                    Error::configuration(format!("Invalid config file {}: {}", path.display(), e))
                })?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.fetch.page_url.is_empty() {
            return Err(Error::configuration("Bulletin page URL cannot be empty"));
        }
        if !self.fetch.page_url.starts_with("http") {
            return Err(Error::configuration(format!(
                "Bulletin page URL must be http(s): {}",
                self.fetch.page_url
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::configuration("Timeout must be greater than 0"));
        }
        if self.output.output_dir.as_os_str().is_empty() {
            return Err(Error::configuration("Output directory cannot be empty"));
        }
        Ok(())
    }
}
