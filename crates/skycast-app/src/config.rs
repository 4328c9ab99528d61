//! Settings parser for config.toml
//!
//! Settings live at `<config-dir>/skycast/config.toml`. A missing file is
//! fine (defaults apply); a malformed file is a config error. The
//! `OPENWEATHER_API_KEY` environment variable always wins over the file so
//! keys can be kept out of dotfiles.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use skycast_api::DEFAULT_ENDPOINT;
use skycast_core::prelude::*;

const CONFIG_DIR: &str = "skycast";
const CONFIG_FILENAME: &str = "config.toml";
const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// OpenWeather API key; `OPENWEATHER_API_KEY` takes precedence
    pub api_key: Option<String>,
    /// Current-weather endpoint
    pub endpoint: String,
    /// City shown on startup
    pub default_city: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_city: "London".to_string(),
        }
    }
}

/// Default config file location: `<config-dir>/skycast/config.toml`
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

impl Settings {
    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = if path.exists() {
            info!("Loading settings from {}", path.display());
            let raw = std::fs::read_to_string(path)?;
            toml::from_str(&raw)
                .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?
        } else {
            Self::default()
        };

        settings.apply_env();
        settings.validate()?;
        Ok(settings)
    }

    /// Environment overrides.
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    fn validate(&self) -> Result<()> {
        Url::parse(&self.endpoint)
            .map_err(|e| Error::config(format!("invalid endpoint '{}': {e}", self.endpoint)))?;
        if self.default_city.trim().is_empty() {
            return Err(Error::config("default_city must not be empty"));
        }
        Ok(())
    }

    /// The API key, or the actionable missing-key error.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(Error::MissingApiKey)
    }
}
