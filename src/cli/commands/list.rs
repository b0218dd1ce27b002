//! List command - print cached primes without entering the loop

use crate::cache;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::PrimeResult;
use crate::ui;
use std::path::Path;
use tracing::debug;

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config, cache_path: &Path) -> PrimeResult<()> {
    // No load message here: json and plain output feed scripts.
    let (cache, outcome) = cache::load_or_seed(cache_path);
    debug!(?outcome, "cache ready for listing");

    match args.format {
        OutputFormat::Table => {
            ui::output::prime_table(cache.as_slice(), config.list.columns, config.list.width);
        }
        OutputFormat::Json => print_json(cache.as_slice())?,
        OutputFormat::Plain => {
            for prime in cache.iter() {
                println!("{}", prime);
            }
        }
    }

    Ok(())
}

fn print_json(primes: &[u64]) -> PrimeResult<()> {
    #[derive(serde::Serialize)]
    struct ListJson<'a> {
        count: usize,
        primes: &'a [u64],
    }

    let listing = ListJson {
        count: primes.len(),
        primes,
    };
    println!("{}", serde_json::to_string_pretty(&listing)?);
    Ok(())
}
