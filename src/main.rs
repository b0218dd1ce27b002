//! primecache - Interactive primality tester
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use primecache::cli::{commands, Cli, Commands};
use primecache::config::ConfigManager;
use primecache::error::PrimeResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> PrimeResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load()?;

    init_logging(cli.verbose, &config.general.log_format);

    let cache_path = ConfigManager::resolve_cache_path(cli.cache.as_deref(), &config);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl(&config, &cache_path),
        Commands::Check(args) => commands::check(args, &config, &cache_path),
        Commands::List(args) => commands::list(args, &config, &cache_path),
        Commands::Config(args) => commands::config(args, &config_manager, &config),
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, log_format: &str) {
    let filter = match verbose {
        0 => EnvFilter::new("primecache=warn"),
        1 => EnvFilter::new("primecache=info"),
        _ => EnvFilter::new("primecache=debug"),
    };

    // Logs go to stderr so stdout stays parseable for scripts.
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .init();
    }
}
