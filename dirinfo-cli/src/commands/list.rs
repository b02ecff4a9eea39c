//! List command implementation.
//!
//! This module implements the listing run: it loads configuration, wires the
//! real filesystem and terminal into the library orchestrator and streams the
//! report to stdout.

use crate::error::CliError;
use crate::utils::{listing_options, load_configuration};
use clap::Args;
use dirinfo::{
    ListingOrchestrator, ListingReport, Logger, PathDialect, SystemFileSystem, SystemTerminal,
};
use std::io::Write;

/// List the files of one directory.
#[derive(Args)]
pub struct ListCommand {
    /// Absolute directory path (d:\kat on Windows, /kat/kat2 elsewhere)
    #[arg(value_name = "DIRECTORY", allow_hyphen_values = true)]
    pub path: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, logger: &Logger) -> Result<ListingReport, CliError> {
        // 1. Load configuration
        let config = load_configuration(logger)?;
        let options = listing_options(&config)?;

        // 2. Wire the host collaborators
        let dialect = PathDialect::host();
        logger.debug(&format!("dialect: {dialect}"));
        if let Some(width) = options.width {
            logger.debug(&format!("width: {width} (configured)"));
        }
        let orchestrator = ListingOrchestrator::new(SystemFileSystem, SystemTerminal, dialect)
            .with_options(options);

        // 3. Run and flush
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let report = orchestrator.run(self.path.as_deref(), &mut out)?;
        out.flush()?;

        logger.info(&format!(
            "listed {} file(s), {} per-file failure(s)",
            report.listed,
            report.file_failures.len()
        ));
        Ok(report)
    }
}
