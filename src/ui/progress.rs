//! Spinner shown while factor primes are being generated

use super::context::UiContext;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for a potentially long cache extension.
///
/// Only rendered in interactive sessions; piped output gets the plain
/// completion message alone.
pub struct ExtensionSpinner {
    bar: Option<ProgressBar>,
}

impl ExtensionSpinner {
    /// Start a spinner for the given target (no-op when not interactive)
    pub fn start(ctx: &UiContext, target: u64) -> Self {
        let bar = if ctx.use_fancy_output() {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg:.dim}")
                    .unwrap()
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
            );
            bar.set_message(format!("Creating potential factor primes for {}...", target));
            bar.enable_steady_tick(Duration::from_millis(120));
            Some(bar)
        } else {
            None
        };
        Self { bar }
    }

    /// Clear the spinner so the verdict can print on a clean line
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
