//! Client configuration file
//!
//! An optional YAML file at `~/.config/futurama-roster/config.yaml`:
//!
//! ```yaml
//! base_url: https://futuramaapi.com
//! locale: es
//! ```

use crate::client::DEFAULT_BASE_URL;
use crate::error::FuturamaError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// API host (defaults to the public API)
    pub base_url: Option<String>,
    /// Display language tag for the UI layer (e.g. "en", "es")
    pub locale: Option<String>,
}

impl ApiConfig {
    /// Load configuration from the default location, or defaults if there is no file
    pub fn load_default() -> Result<Self, FuturamaError> {
        let path = Self::default_path()?;
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self, FuturamaError> {
        if !path.exists() {
            return Err(FuturamaError::ConfigNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self, FuturamaError> {
        // An empty file deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ApiConfig = serde_yaml::from_str(content)?;
        if let Some(url) = &config.base_url
            && url.trim().is_empty()
        {
            return Err(FuturamaError::ConfigInvalid(
                "base_url must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Get the default config path (~/.config/futurama-roster/config.yaml)
    pub fn default_path() -> Result<PathBuf, FuturamaError> {
        let home = dirs_next::home_dir().ok_or(FuturamaError::NoHomeDirectory)?;
        Ok(home
            .join(".config")
            .join("futurama-roster")
            .join("config.yaml"))
    }

    /// The effective base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Overlay command-line values on top of file values
    pub fn with_overrides(mut self, base_url: Option<String>, locale: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        if locale.is_some() {
            self.locale = locale;
        }
        self
    }
}
