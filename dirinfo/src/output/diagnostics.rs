//! User-facing diagnostics.

use std::io::{self, Write};

use super::ReportFormat;
use crate::error::Error;

impl ReportFormat {
    /// Print the diagnostic for `err`.
    ///
    /// Validation and existence failures get their fixed guidance text;
    /// I/O failures print their message followed by a hint when one applies.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_diagnostic<W: Write + ?Sized>(&self, out: &mut W, err: &Error) -> io::Result<()> {
        match err {
            Error::MissingArgument => {
                writeln!(out, "Missing directory path parameter.")?;
                writeln!(out, "Usage: dirinfo <DIRECTORY>")
            }
            Error::InvalidSyntax { dialect, .. } => {
                writeln!(out, "Invalid path format for {}.", dialect.description())?;
                writeln!(out, "Expected format: {}", dialect.expected_pattern())
            }
            Error::DirectoryNotFound { .. } => {
                writeln!(out)?;
                writeln!(out, "Directory does not exist.")
            }
            other => {
                writeln!(out, "{other}")?;
                if let Some(hint) = other.hint() {
                    writeln!(out, "{hint}")?;
                }
                Ok(())
            }
        }
    }
}
