//! primecache - Interactive primality tester
//!
//! Answers primality questions by trial division against a persisted,
//! append-only cache of known primes, extending the cache on demand.

pub mod cache;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod ui;

pub use error::{PrimeError, PrimeResult};
