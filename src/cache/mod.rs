//! The prime cache: an append-only, strictly ascending set of known primes
//!
//! The cache is complete by construction: every prime up to `max()` is
//! present, so membership doubles as a primality answer for anything in
//! range. It is seeded with `{2, 3}` and only ever grows by appending
//! larger primes discovered by the engine.

pub mod store;

pub use store::{load_or_seed, LoadOutcome};

/// Primes the cache starts from when no persisted state exists.
pub const SEED: [u64; 2] = [2, 3];

/// Ordered collection of known primes.
///
/// Invariants: non-empty, strictly ascending, and gap-free by primality
/// (any integer `<= max()` that is absent is composite).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeCache {
    primes: Vec<u64>,
}

impl PrimeCache {
    /// Create a cache holding only the seed primes `{2, 3}`.
    pub fn seeded() -> Self {
        Self {
            primes: SEED.to_vec(),
        }
    }

    /// Build a cache from a pre-validated ascending prime list.
    ///
    /// Callers (the store) are responsible for checking the seed prefix
    /// and ordering before handing the list over.
    pub(crate) fn from_validated(primes: Vec<u64>) -> Self {
        debug_assert!(primes.starts_with(&SEED));
        Self { primes }
    }

    /// Number of cached primes.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Always false: the cache is seeded non-empty and only grows.
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Exact membership test.
    pub fn contains(&self, n: u64) -> bool {
        self.primes.binary_search(&n).is_ok()
    }

    /// Largest known prime. Total because the cache is never empty.
    pub fn max(&self) -> u64 {
        *self.primes.last().expect("cache is never empty")
    }

    /// Append a newly discovered prime.
    ///
    /// Precondition: `p` is prime and `p > max()`. The engine's extension
    /// loop is the only producer and upholds both; breaking either would
    /// silently corrupt the completeness invariant, so this is checked in
    /// debug builds rather than reported at runtime.
    pub fn append(&mut self, p: u64) {
        debug_assert!(p > self.max(), "append must keep the cache ascending");
        self.primes.push(p);
    }

    /// Iterate cached primes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.primes.iter().copied()
    }

    /// Cached primes as a slice, ascending.
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        Self::seeded()
    }
}
