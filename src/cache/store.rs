//! Newline-delimited file store for the prime cache
//!
//! The persisted format is one base-10 prime per line, ascending, no
//! header. Loading validates the format strictly and rejects anything
//! that would break the cache invariants; rejection is recoverable and
//! callers fall back to the seed.

use super::{PrimeCache, SEED};
use crate::error::{PrimeError, PrimeResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// How the cache came into existence at startup.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Deserialized from the persisted file.
    Loaded { count: usize },
    /// Persisted state was absent or unusable; started from `{2, 3}`.
    Seeded { reason: String },
}

/// Load a persisted cache, validating the format and the invariants.
///
/// The extension algorithm steps odd candidates up from `max()`, so a
/// file that does not begin with the `2, 3` seed prefix is unusable even
/// if every line parses.
pub fn load(path: &Path) -> PrimeResult<PrimeCache> {
    let content = fs::read_to_string(path).map_err(|e| PrimeError::CacheRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut primes = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: u64 = line.parse().map_err(|_| {
            PrimeError::cache_invalid(
                path,
                format!("line {} is not an unsigned integer: {:?}", index + 1, line),
            )
        })?;
        if let Some(&last) = primes.last() {
            if value <= last {
                return Err(PrimeError::cache_invalid(
                    path,
                    format!("line {} breaks ascending order: {} after {}", index + 1, value, last),
                ));
            }
        }
        primes.push(value);
    }

    if !primes.starts_with(&SEED) {
        return Err(PrimeError::cache_invalid(path, "missing the 2, 3 seed prefix"));
    }

    debug!(count = primes.len(), path = %path.display(), "loaded prime cache");
    Ok(PrimeCache::from_validated(primes))
}

/// Load the cache, falling back to the seed on any load failure.
///
/// Load failure is never fatal; the outcome tells the caller what to
/// report to the user.
pub fn load_or_seed(path: &Path) -> (PrimeCache, LoadOutcome) {
    match load(path) {
        Ok(cache) => {
            let count = cache.len();
            (cache, LoadOutcome::Loaded { count })
        }
        Err(e) => {
            info!(reason = %e, "starting from the seed cache");
            (
                PrimeCache::seeded(),
                LoadOutcome::Seeded {
                    reason: e.to_string(),
                },
            )
        }
    }
}

/// Persist the cache, one prime per line, overwriting the destination.
///
/// The parent directory is created if missing so a fresh install can
/// write to the default data path.
pub fn persist(cache: &PrimeCache, path: &Path) -> PrimeResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| PrimeError::DirCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut content = String::with_capacity(cache.len() * 8);
    for prime in cache.iter() {
        // writing to a String cannot fail
        let _ = writeln!(content, "{}", prime);
    }

    fs::write(path, content).map_err(|e| PrimeError::CachePersist {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(count = cache.len(), path = %path.display(), "persisted prime cache");
    Ok(())
}
