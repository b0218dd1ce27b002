//! Output functions for consistent CLI formatting
//!
//! Verdict and cache messages keep the exact phrasing users of the
//! original utility see in scripts, so they stay grep-compatible.

use crate::cache::LoadOutcome;
use crate::engine::{CheckOutcome, Extension, Verdict};
use console::style;

/// Report how the cache came up at startup
pub fn load_outcome(outcome: &LoadOutcome) {
    match outcome {
        LoadOutcome::Loaded { count } => {
            println!("Loaded cache of {} primes from disk", count);
        }
        LoadOutcome::Seeded { reason } => {
            println!(
                "Couldn't load cache, starting from scratch ({})",
                style(reason).dim()
            );
        }
    }
}

/// Report a successful shutdown persistence
pub fn persisted(count: usize) {
    println!("Wrote cache of {} primes to disk", count);
}

/// Print the verdict for one checked integer, extension report first
pub fn verdict(target: u64, outcome: &CheckOutcome) {
    match outcome.extension {
        Some(Extension::Extended(stats)) => {
            println!(
                "Creating potential factor primes finished in {} seconds (currently {} primes in cache)",
                stats.elapsed.as_millis() as f64 / 1000.0,
                stats.cache_len
            );
        }
        Some(Extension::Skipped) => {
            println!("Skip creating potential factor primes");
        }
        None => {}
    }

    match outcome.verdict {
        Verdict::NotPrime if target == 0 => println!("0 is not a prime."),
        Verdict::NotPrime => println!("{} is not a prime (even number)", target),
        Verdict::PrimeByParity => println!("{} is a prime.", target),
        Verdict::PrimeCached => println!("{} is a prime (cached)", target),
        Verdict::NotPrimeCached => println!("{} is not a prime (cached)", target),
        Verdict::PrimeComputed => println!("{} is a prime", target),
        Verdict::NotPrimeComputed => println!("{} is not a prime", target),
    }
    println!();
}

/// Report a line that did not parse as an integer
pub fn format_error() {
    println!("Input must be an integer");
    println!();
}

/// Report a negative integer
pub fn range_error() {
    println!("Integer must be positive");
    println!();
}

/// Print all cached primes in fixed-width columns plus a count line
pub fn prime_table(primes: &[u64], columns: usize, width: usize) {
    for row in format_prime_rows(primes, columns, width) {
        println!("{}", row);
    }
    println!("Wrote out {} prime numbers", primes.len());
    println!();
}

/// Lay out primes into left-aligned fixed-width rows.
///
/// The last row may be partial; it is emitted anyway so every cached
/// prime is visible.
pub fn format_prime_rows(primes: &[u64], columns: usize, width: usize) -> Vec<String> {
    let columns = columns.max(1);
    primes
        .chunks(columns)
        .map(|chunk| {
            let mut row = String::with_capacity(columns * width);
            for prime in chunk {
                row.push_str(&format!("{:<width$}", prime, width = width));
            }
            row.trim_end().to_string()
        })
        .collect()
}
