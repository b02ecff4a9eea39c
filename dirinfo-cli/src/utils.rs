//! Utility functions for CLI operations.
//!
//! Configuration loading and the verbose run notes shared by the command
//! implementation.

use crate::error::CliError;
use dirinfo::{Config, ConfigBuilder, ListingOptions, Logger};

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Configuration file (`DIRINFO_CONFIG` or `~/.dirinfo/config.yaml`)
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(logger: &Logger) -> Result<Config, CliError> {
    let builder = ConfigBuilder::new();

    match builder.config_path() {
        Some(path) => logger.debug(&format!("config file: {}", path.display())),
        None => logger.debug("config file: none (no home directory)"),
    }

    let config = builder.build()?;
    Ok(config)
}

/// Derive listing options from loaded configuration.
pub fn listing_options(config: &Config) -> Result<ListingOptions, CliError> {
    Ok(ListingOptions::try_from(config)?)
}
