//! CLI-specific error types.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors. Every failure is reported on stderr and the process still
//! exits with status 0, so no exit-code mapping is carried here.

use dirinfo::Error as LibError;
use std::fmt;

/// CLI-specific error type.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error while writing the listing.
    Io(std::io::Error),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::Config(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Configuration(inner) => CliError::Config(inner.to_string()),
            LibError::Validation { .. } => CliError::Config(e.to_string()),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_become_config_errors() {
        let err = CliError::from(LibError::Validation {
            field: "width".to_string(),
            message: "must be at least 1".to_string(),
        });
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn test_other_library_errors_are_wrapped() {
        let err = CliError::from(LibError::MissingArgument);
        assert!(matches!(err, CliError::Library(LibError::MissingArgument)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_display() {
        let err = CliError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
