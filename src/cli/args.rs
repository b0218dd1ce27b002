//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// primecache - Interactive primality tester
///
/// Checks integers for primality by trial division against a growable,
/// persisted cache of known primes.
#[derive(Parser, Debug)]
#[command(name = "primecache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive prompt)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PRIMECACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache file path (overrides the config file)
    #[arg(long, global = true, env = "PRIMECACHE_FILE")]
    pub cache: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive prompt
    Repl,

    /// Check integers for primality, then persist the cache
    Check(CheckArgs),

    /// Print cached primes
    List(ListArgs),

    /// Show or locate configuration
    Config(ConfigArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Integers to test
    #[arg(required = true, allow_negative_numbers = true)]
    pub targets: Vec<i64>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width columns with a count line
    Table,
    /// JSON object with count and primes
    Json,
    /// One prime per line (same layout as the cache file)
    Plain,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config (defaults to show)
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
