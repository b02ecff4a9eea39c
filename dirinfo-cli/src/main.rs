//! Main entry point for the dirinfo CLI.
//!
//! Validates one directory path and lists the files it contains with their
//! timestamps and attribute flags. Every outcome, including errors, is
//! printed and the process exits with status 0.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments; help, version and usage errors are printed as-is
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.print().is_err() {
                eprintln!("{e}");
            }
            return;
        }
    };

    // Initialize logging from DIRINFO_LOG_MODE
    let logger = dirinfo::init_logger();
    logger.install();

    // Report failures but keep the zero exit status
    if let Err(e) = cli.list.execute(&logger) {
        eprintln!("Error: {e}");
    }
}
