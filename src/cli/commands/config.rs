//! Config command - show configuration or its path

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::PrimeResult;

/// Execute the config command
pub fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> PrimeResult<()> {
    match args.action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            print!("{}", toml::to_string_pretty(config)?);
        }
        ConfigAction::Path => {
            println!("{}", manager.config_path().display());
        }
    }
    Ok(())
}
