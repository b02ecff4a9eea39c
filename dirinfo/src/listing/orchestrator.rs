//! End-to-end listing of one directory.
//!
//! The orchestrator runs the fixed pipeline: argument check, lower-case and
//! trim, syntax validation, normalization, existence check, enumeration, and
//! one metadata read per file. Failures never escape as panics or errors;
//! each one is printed as a diagnostic and recorded in the returned
//! [`ListingReport`]. The only error `run` returns is a failed write to the
//! output sink.

use std::io::{self, Write};

use crate::config::Config;
use crate::error::{Error, ErrorScope, Result};
use crate::listing::fs::FileSystem;
use crate::listing::terminal::Terminal;
use crate::output::ReportFormat;
use crate::path::{wrap_path, NormalizedPath, PathDialect, ValidatedPath};

/// Settings that shape one listing run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingOptions {
    /// Keep the argument's case instead of lower-casing it.
    pub preserve_case: bool,
    /// Fixed output width; the terminal is queried when `None`.
    pub width: Option<usize>,
    /// Rendering of blocks and diagnostics.
    pub format: ReportFormat,
}

impl TryFrom<&Config> for ListingOptions {
    type Error = Error;

    fn try_from(config: &Config) -> Result<Self> {
        let format = match config.timestamp_format.as_deref() {
            Some(timestamp_format) => ReportFormat::new(timestamp_format)?,
            None => ReportFormat::default(),
        };
        Ok(Self {
            preserve_case: config.preserve_case.unwrap_or(false),
            width: config.width,
            format,
        })
    }
}

/// Outcome of one listing run.
#[derive(Debug, Default)]
pub struct ListingReport {
    /// The normalized directory, once it was found to exist.
    pub directory: Option<NormalizedPath>,
    /// Number of files whose metadata was printed.
    pub listed: usize,
    /// Per-file failures, in the order they happened.
    pub file_failures: Vec<Error>,
    /// The failure that stopped the run, if any.
    pub failure: Option<Error>,
}

impl ListingReport {
    /// Whether the run went through every file (per-file failures allowed).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Lower-case (unless `preserve_case`) and trim a raw command-line argument.
///
/// # Examples
///
/// ```
/// use dirinfo::listing::prepare_input;
///
/// assert_eq!(prepare_input("  /Home/User  ", false), "/home/user");
/// assert_eq!(prepare_input("  /Home/User  ", true), "/Home/User");
/// ```
#[must_use]
pub fn prepare_input(raw: &str, preserve_case: bool) -> String {
    if preserve_case {
        raw.trim().to_string()
    } else {
        raw.to_lowercase().trim().to_string()
    }
}

/// Lists one directory through injected collaborators.
///
/// # Examples
///
/// ```no_run
/// use dirinfo::listing::{ListingOrchestrator, SystemFileSystem, SystemTerminal};
/// use dirinfo::path::PathDialect;
///
/// let orchestrator =
///     ListingOrchestrator::new(SystemFileSystem, SystemTerminal, PathDialect::host());
/// let mut stdout = std::io::stdout();
/// let report = orchestrator.run(Some("/tmp"), &mut stdout).unwrap();
/// println!("{} file(s) listed", report.listed);
/// ```
#[derive(Debug)]
pub struct ListingOrchestrator<F, T> {
    fs: F,
    terminal: T,
    dialect: PathDialect,
    options: ListingOptions,
}

impl<F: FileSystem, T: Terminal> ListingOrchestrator<F, T> {
    /// Create an orchestrator with default options.
    #[must_use]
    pub fn new(fs: F, terminal: T, dialect: PathDialect) -> Self {
        Self {
            fs,
            terminal,
            dialect,
            options: ListingOptions::default(),
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: ListingOptions) -> Self {
        self.options = options;
        self
    }

    /// The dialect paths are checked against.
    #[must_use]
    pub fn dialect(&self) -> PathDialect {
        self.dialect
    }

    /// Turn the raw argument into an existing, normalized directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArgument`], [`Error::InvalidSyntax`] or
    /// [`Error::DirectoryNotFound`].
    pub fn resolve_directory(&self, raw: Option<&str>) -> Result<NormalizedPath> {
        let raw = raw.ok_or(Error::MissingArgument)?;
        let input = prepare_input(raw, self.options.preserve_case);
        let directory = ValidatedPath::parse(&input, self.dialect)?.normalize();

        if !self.fs.directory_exists(directory.as_path()) {
            return Err(Error::DirectoryNotFound {
                path: directory.as_path().to_path_buf(),
            });
        }
        Ok(directory)
    }

    /// Run the whole listing for `raw`, printing to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    pub fn run<W: Write + ?Sized>(&self, raw: Option<&str>, out: &mut W) -> io::Result<ListingReport> {
        let format = &self.options.format;
        let mut report = ListingReport::default();

        let directory = match self.resolve_directory(raw) {
            Ok(directory) => directory,
            Err(err) => {
                format.write_diagnostic(out, &err)?;
                report.failure = Some(err);
                return Ok(report);
            }
        };
        format.write_banner(out)?;

        let files = match self.fs.list_immediate_files(directory.as_path()) {
            Ok(files) => files,
            Err(source) => {
                let err = Error::from_directory_io(directory.as_path(), source);
                format.write_diagnostic(out, &err)?;
                report.directory = Some(directory);
                report.failure = Some(err);
                return Ok(report);
            }
        };

        let width = self.options.width.unwrap_or_else(|| self.terminal.width());
        log::debug!(
            "listing {} file(s) of {directory} at width {width}",
            files.len()
        );

        for file in files {
            match self.fs.file_metadata(&file) {
                Ok(record) => {
                    let display = record.display_path();
                    let lines = wrap_path(&display, self.dialect, width);
                    format.write_record(out, lines, &record)?;
                    report.listed += 1;
                }
                Err(source) => {
                    let err = Error::from_file_io(&file, source);
                    format.write_diagnostic(out, &err)?;
                    if err.scope() == ErrorScope::WholeRun {
                        report.failure = Some(err);
                        break;
                    }
                    report.file_failures.push(err);
                }
            }
        }

        report.directory = Some(directory);
        Ok(report)
    }
}
