//! Repl command - the interactive primality prompt
//!
//! Reads one request per line from stdin, answers it, and persists the
//! cache when the user leaves. The loop is single-threaded: each check
//! runs to completion (including any cache extension) before the next
//! line is read.

use super::check::check_and_report;
use crate::cache::{self, store};
use crate::config::Config;
use crate::error::{PrimeError, PrimeResult};
use crate::ui::{self, UiContext};
use console::style;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Request {
    Exit,
    List,
    Check(u64),
}

/// Recoverable input problems; the loop reports and reprompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestError {
    NotAnInteger,
    Negative,
}

/// Execute the repl command
pub fn execute(config: &Config, cache_path: &Path) -> PrimeResult<()> {
    let ctx = UiContext::detect();

    let (mut cache, outcome) = cache::load_or_seed(cache_path);
    ui::output::load_outcome(&outcome);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        prompt(&ctx)?;
        // EOF means the pipe closed; treat it like `exit` so the cache
        // still gets persisted.
        let Some(line) = lines.next() else {
            debug!("stdin closed, leaving the loop");
            break;
        };
        let line = line.map_err(|e| PrimeError::io("reading from stdin", e))?;

        match parse_request(&line) {
            Ok(Request::Exit) => break,
            Ok(Request::List) => {
                ui::output::prime_table(cache.as_slice(), config.list.columns, config.list.width);
            }
            Ok(Request::Check(target)) => check_and_report(target, &mut cache, &ctx),
            Err(RequestError::NotAnInteger) => ui::output::format_error(),
            Err(RequestError::Negative) => ui::output::range_error(),
        }
    }

    store::persist(&cache, cache_path)?;
    ui::output::persisted(cache.len());
    Ok(())
}

/// Show the prompt marker in interactive sessions
fn prompt(ctx: &UiContext) -> PrimeResult<()> {
    if ctx.use_fancy_output() {
        print!("{} ", style(">").cyan().bold());
        io::stdout()
            .flush()
            .map_err(|e| PrimeError::io("flushing prompt", e))?;
    }
    Ok(())
}

/// Parse one input line into a request.
///
/// `exit` and `list` are reserved words; everything else must be a
/// non-negative base-10 integer.
fn parse_request(line: &str) -> Result<Request, RequestError> {
    let line = line.trim();
    match line {
        "exit" => Ok(Request::Exit),
        "list" => Ok(Request::List),
        _ => match line.parse::<i64>() {
            Ok(n) if n < 0 => Err(RequestError::Negative),
            Ok(n) => Ok(Request::Check(n as u64)),
            Err(_) => Err(RequestError::NotAnInteger),
        },
    }
}
