//! Configuration management for primecache

pub mod schema;

pub use schema::Config;

use crate::error::{PrimeError, PrimeResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the config file path this manager reads
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("primecache")
            .join("config.toml")
    }

    /// Get the default cache file path
    pub fn default_cache_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("primecache")
            .join("primes.cache")
    }

    /// Load configuration, using defaults if no file exists
    pub fn load(&self) -> PrimeResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            PrimeError::io(
                format!("reading config from {}", self.config_path.display()),
                e,
            )
        })?;

        toml::from_str(&content).map_err(|e| PrimeError::ConfigInvalid {
            path: self.config_path.clone(),
            reason: e.to_string(),
        })
    }

    /// Resolve the cache file path: CLI flag, then config, then default
    pub fn resolve_cache_path(cli_override: Option<&Path>, config: &Config) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        if let Some(ref path) = config.cache.path {
            return path.clone();
        }
        Self::default_cache_path()
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
