//! Check command - one-shot primality checks
//!
//! Same verdicts as the interactive loop, driven from argv. The cache
//! is persisted afterwards so factor primes discovered here benefit
//! later runs.

use crate::cache::{self, store, PrimeCache};
use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::engine;
use crate::error::PrimeResult;
use crate::ui::{self, ExtensionSpinner, UiContext};
use std::path::Path;

/// Execute the check command
pub fn execute(args: CheckArgs, _config: &Config, cache_path: &Path) -> PrimeResult<()> {
    let ctx = UiContext::detect();

    let (mut cache, outcome) = cache::load_or_seed(cache_path);
    ui::output::load_outcome(&outcome);

    for &target in &args.targets {
        if target < 0 {
            ui::output::range_error();
            continue;
        }
        check_and_report(target as u64, &mut cache, &ctx);
    }

    store::persist(&cache, cache_path)?;
    ui::output::persisted(cache.len());
    Ok(())
}

/// Run one check with a spinner over the potentially slow extension.
///
/// The spinner is only worth starting when the trial-division path will
/// run, i.e. for odd targets beyond the cached range.
pub(crate) fn check_and_report(target: u64, cache: &mut PrimeCache, ctx: &UiContext) {
    let slow_path = target % 2 == 1 && target > cache.max();
    let spinner = slow_path.then(|| ExtensionSpinner::start(ctx, target));

    let outcome = engine::check(target, cache);

    if let Some(spinner) = spinner {
        spinner.finish();
    }
    ui::output::verdict(target, &outcome);
}
