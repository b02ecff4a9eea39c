//! Per-file blocks and the directory banner.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::SystemTime;

use chrono::{DateTime, Local};

use super::{ReportFormat, LABEL_WIDTH, UNAVAILABLE};
use crate::listing::FileMetadataRecord;
use crate::path::DisplayLine;

impl ReportFormat {
    /// Print the banner shown once the directory is known to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_banner<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Directory exists.")?;
        writeln!(out)
    }

    /// Print one file block: the wrapped path lines, the labeled metadata
    /// lines, then a blank separator line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_record<W, L>(
        &self,
        out: &mut W,
        path_lines: L,
        record: &FileMetadataRecord,
    ) -> io::Result<()>
    where
        W: Write + ?Sized,
        L: IntoIterator<Item = DisplayLine>,
    {
        for line in path_lines {
            writeln!(out, "{line}")?;
        }

        write_field(out, "Created:", &self.timestamp(record.created))?;
        write_field(out, "Last access:", &self.timestamp(record.accessed))?;
        write_field(out, "Last write:", &self.timestamp(record.modified))?;
        write_field(out, "Hidden:", &record.hidden.to_string())?;
        write_field(out, "Read-only:", &record.read_only.to_string())?;
        writeln!(out)
    }

    /// Render a timestamp in local time.
    ///
    /// Missing times and times the format cannot render come out as
    /// `unavailable`.
    #[must_use]
    pub fn timestamp(&self, time: Option<SystemTime>) -> String {
        let Some(time) = time else {
            return UNAVAILABLE.to_string();
        };
        let local: DateTime<Local> = time.into();
        let mut rendered = String::new();
        match write!(rendered, "{}", local.format(&self.timestamp_format)) {
            Ok(()) => rendered,
            Err(_) => {
                log::debug!("timestamp format '{}' failed to render", self.timestamp_format);
                UNAVAILABLE.to_string()
            }
        }
    }
}

fn write_field<W: Write + ?Sized>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{label:<LABEL_WIDTH$} {value}")
}
