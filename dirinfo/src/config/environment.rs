//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `DIRINFO_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Names a configuration file to load instead of `~/.dirinfo/config.yaml`.
pub const CONFIG_ENV: &str = "DIRINFO_CONFIG";

/// Fixed output width.
pub const WIDTH_ENV: &str = "DIRINFO_WIDTH";

/// Timestamp `strftime` format.
pub const TIME_FORMAT_ENV: &str = "DIRINFO_TIME_FORMAT";

/// Keep the argument's case.
pub const PRESERVE_CASE_ENV: &str = "DIRINFO_PRESERVE_CASE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use dirinfo::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric width, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(width) = env::var(WIDTH_ENV) {
            config.width = Some(Self::parse_width(&width)?);
        }

        if let Ok(format) = env::var(TIME_FORMAT_ENV) {
            config.timestamp_format = Some(format);
        }

        if let Ok(val) = env::var(PRESERVE_CASE_ENV) {
            config.preserve_case = Some(Self::parse_bool(PRESERVE_CASE_ENV, &val)?);
        }

        Ok(())
    }

    fn parse_width(s: &str) -> Result<usize> {
        match s.trim().parse::<usize>() {
            Ok(width) if width > 0 => Ok(width),
            _ => Err(Error::Validation {
                field: WIDTH_ENV.into(),
                message: "Must be a positive integer".into(),
            }),
        }
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
