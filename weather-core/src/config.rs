use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, time::Duration};

use crate::provider::openweather::DEFAULT_BASE_URL;

/// Environment variable carrying the API credential; wins over the config file.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// base_url = "https://api.openweathermap.org"
/// timeout_secs = 10
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout; unset leaves the HTTP client's default in place.
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from disk, then let the environment supply the credential.
    pub fn resolve() -> Result<Self> {
        let cfg = Self::load()?;
        Ok(cfg.with_api_key_override(env::var(API_KEY_ENV).ok()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration TOML")
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-widget", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replaces the credential when `key` is present and non-blank.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Returns the API key, if present.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
