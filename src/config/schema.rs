//! Configuration schema for primecache
//!
//! Configuration is stored at `~/.config/primecache/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache file settings
    pub cache: CacheFileConfig,

    /// Prime listing settings
    pub list: ListConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Cache file configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheFileConfig {
    /// Cache file path (defaults to the local data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Layout of the interactive `list` output
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Primes per row
    pub columns: usize,

    /// Left-aligned cell width in characters
    pub width: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            columns: 10,
            width: 10,
        }
    }
}
