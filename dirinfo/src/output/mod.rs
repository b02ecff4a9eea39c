//! Rendering of listing output.
//!
//! Everything the listing prints goes through [`ReportFormat`]:
//! - the per-file block (wrapped path, five labeled lines, blank line)
//! - the "directory exists" banner
//! - diagnostics for every [`Error`](crate::Error) variant
//!
//! Output is written to any `io::Write`, which keeps the orchestrator free
//! of direct console access.

mod diagnostics;
mod report;

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;

use crate::error::{Error, Result};

/// Width of the label column in a file block.
pub const LABEL_WIDTH: usize = 26;

/// Default `strftime` format for timestamps.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text printed in place of a timestamp the platform does not report.
pub const UNAVAILABLE: &str = "unavailable";

/// Rendering settings for listing output.
///
/// # Examples
///
/// ```
/// use dirinfo::output::ReportFormat;
///
/// let format = ReportFormat::new("%d.%m.%Y %H:%M").unwrap();
/// assert_eq!(format.timestamp_format(), "%d.%m.%Y %H:%M");
///
/// assert!(ReportFormat::new("%Q").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormat {
    timestamp_format: String,
}

impl ReportFormat {
    /// Create a format rendering timestamps with `timestamp_format`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the format string is not understood by
    /// `chrono`.
    pub fn new(timestamp_format: &str) -> Result<Self> {
        validate_timestamp_format(timestamp_format)?;
        Ok(Self {
            timestamp_format: timestamp_format.to_string(),
        })
    }

    /// The `strftime` format used for timestamps.
    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Check that `format` is a usable `chrono` format string.
///
/// # Errors
///
/// Returns [`Error::Validation`] naming the `timestamp_format` field.
pub fn validate_timestamp_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(Error::Validation {
            field: "timestamp_format".into(),
            message: "Must not be empty".into(),
        });
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(Error::Validation {
            field: "timestamp_format".into(),
            message: format!("Invalid strftime format '{format}'"),
        });
    }

    // Some specifiers parse but cannot be rendered.
    let mut sample = String::new();
    if write!(sample, "{}", Local::now().format(format)).is_err() {
        return Err(Error::Validation {
            field: "timestamp_format".into(),
            message: format!("Format '{format}' cannot render a timestamp"),
        });
    }
    Ok(())
}
