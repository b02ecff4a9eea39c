//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::validate_timestamp_format;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use dirinfo::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { width: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(width) = config.width {
            Self::validate_width(width)?;
        }

        if let Some(ref format) = config.timestamp_format {
            validate_timestamp_format(format)?;
        }

        Ok(())
    }

    fn validate_width(width: usize) -> Result<()> {
        if width == 0 {
            return Err(Error::Validation {
                field: "width".into(),
                message: "Must be at least 1".into(),
            });
        }
        Ok(())
    }
}
