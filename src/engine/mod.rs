//! Trial-division primality engine
//!
//! Answers "is this prime?" against the cache, extending it on demand.
//! All composite numbers factor into primes, so a number with no prime
//! divisor up to its square root is itself prime. Before trial-dividing
//! a target beyond the cached range, the engine first generates every
//! missing prime up to `isqrt(target)`; each candidate in that sweep is
//! itself validated by trial division against the primes already cached,
//! which always suffices because `isqrt(candidate) <= max(cache)` at the
//! time the candidate is tested.

use crate::cache::PrimeCache;
use std::time::{Duration, Instant};
use tracing::debug;

/// Outcome of a single primality check.
///
/// The verdict variant records which path answered; only the boolean
/// projection matters for correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Settled without touching the cache: 0, or an even number above 2.
    NotPrime,
    /// 1, which this tool deliberately reports as prime. Existing cache
    /// consumers depend on the output, so the convention is kept.
    PrimeByParity,
    /// Found in the cache.
    PrimeCached,
    /// Within the cached range but absent, so proven composite by the
    /// completeness invariant.
    NotPrimeCached,
    /// Proven prime by fresh trial division.
    PrimeComputed,
    /// Divisor found by fresh trial division.
    NotPrimeComputed,
}

impl Verdict {
    /// The boolean fact behind the verdict.
    pub fn is_prime(self) -> bool {
        matches!(
            self,
            Self::PrimeByParity | Self::PrimeCached | Self::PrimeComputed
        )
    }
}

/// What the extension step did for a computed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// The cache already covered `isqrt(target)`.
    Skipped,
    /// New factor primes were generated.
    Extended(ExtensionStats),
}

/// Observability data for a cache extension run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtensionStats {
    /// Primes appended during this extension.
    pub added: usize,
    /// Wall-clock time spent generating them.
    pub elapsed: Duration,
    /// Cache size after the extension.
    pub cache_len: usize,
}

/// Verdict plus extension observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub verdict: Verdict,
    /// `Some` only when the trial-division path ran.
    pub extension: Option<Extension>,
}

impl CheckOutcome {
    fn fast(verdict: Verdict) -> Self {
        Self {
            verdict,
            extension: None,
        }
    }
}

/// Check whether `target` is prime, extending the cache as needed.
///
/// Negative input is rejected by the CLI layer; the engine works on
/// `u64`. Checks are ordered cheapest first, and the cache paths are
/// only consulted for odd targets (plus 2, which the seed guarantees is
/// cached).
pub fn check(target: u64, cache: &mut PrimeCache) -> CheckOutcome {
    if target == 0 {
        return CheckOutcome::fast(Verdict::NotPrime);
    }
    if target == 1 {
        return CheckOutcome::fast(Verdict::PrimeByParity);
    }
    if target % 2 == 0 && target != 2 {
        return CheckOutcome::fast(Verdict::NotPrime);
    }
    if cache.contains(target) {
        return CheckOutcome::fast(Verdict::PrimeCached);
    }
    if target <= cache.max() {
        // Completeness invariant: a prime in range would be cached.
        return CheckOutcome::fast(Verdict::NotPrimeCached);
    }

    let extension = extend_to_cover(cache, target);
    let verdict = if is_prime_by_trial_division(target, cache) {
        Verdict::PrimeComputed
    } else {
        Verdict::NotPrimeComputed
    };
    CheckOutcome {
        verdict,
        extension: Some(extension),
    }
}

/// Ensure the cache contains every prime up to `isqrt(target)`.
///
/// Sweeps odd candidates upward from `max(cache)`, appending each prime
/// found, until the largest cached prime reaches `isqrt(target)`. The
/// sweep is self-bootstrapping: when a candidate is tested, the cache
/// already holds every prime up to `isqrt(candidate)`, so trial division
/// against it is conclusive. The final appended prime may overshoot the
/// bound; that keeps the cache gap-free and is harmless.
fn extend_to_cover(cache: &mut PrimeCache, target: u64) -> Extension {
    let bound = target.isqrt();
    let mut last = cache.max();
    if last >= bound {
        return Extension::Skipped;
    }

    let start = Instant::now();
    let before = cache.len();
    let mut candidate = last;
    while last < bound {
        candidate += 2;
        if is_prime_by_trial_division(candidate, cache) {
            cache.append(candidate);
            last = candidate;
        }
    }

    let stats = ExtensionStats {
        added: cache.len() - before,
        elapsed: start.elapsed(),
        cache_len: cache.len(),
    };
    debug!(
        added = stats.added,
        bound,
        elapsed_ms = stats.elapsed.as_millis() as u64,
        "extended factor prime cache"
    );
    debug_assert!(cache.max() >= bound, "extension must cover isqrt(target)");
    Extension::Extended(stats)
}

/// Trial-divide `candidate` against cached primes up to `isqrt(candidate)`.
///
/// Precondition: the cache covers that range. The `take_while` bound
/// makes the iteration total either way, so a coverage bug cannot turn
/// into a runtime error path; it is asserted in debug builds instead.
fn is_prime_by_trial_division(candidate: u64, cache: &PrimeCache) -> bool {
    let bound = candidate.isqrt();
    debug_assert!(
        cache.max() >= bound,
        "cache must cover isqrt({})",
        candidate
    );
    cache
        .iter()
        .take_while(|&p| p <= bound)
        .all(|p| candidate % p != 0)
}
