//! Error types for primecache
//!
//! All modules use `PrimeResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for primecache operations
pub type PrimeResult<T> = Result<T, PrimeError>;

/// All errors that can occur in primecache
#[derive(Error, Debug)]
pub enum PrimeError {
    // Cache store errors
    #[error("Failed to read cache file {path}: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid cache file {path}: {reason}")]
    CacheInvalid { path: PathBuf, reason: String },

    #[error("Failed to write cache file {path}: {source}")]
    CachePersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create directory {path}: {source}")]
    DirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PrimeError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a cache validation error
    pub fn cache_invalid(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CacheInvalid {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if the error is recoverable by falling back to the seed cache
    pub fn is_load_fallback(&self) -> bool {
        matches!(self, Self::CacheRead { .. } | Self::CacheInvalid { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CachePersist { .. } => {
                Some("Check write permission on the cache file, or pass --cache <path>")
            }
            Self::ConfigInvalid { .. } => Some("Fix or delete the config file to use defaults"),
            _ => None,
        }
    }
}
