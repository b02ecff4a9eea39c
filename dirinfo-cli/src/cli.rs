//! CLI structure definition.
//!
//! This module defines the CLI structure using clap's derive macros. There
//! are no subcommands: the single positional argument is the directory to
//! list.

use crate::commands::ListCommand;
use clap::Parser;

/// Command-line tool that lists the files of a directory with their metadata.
#[derive(Parser)]
#[command(name = "dirinfo")]
#[command(
    version,
    about = "List the files of a directory with their timestamps and attributes",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub list: ListCommand,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_directory_is_optional() {
        let cli = Cli::try_parse_from(["dirinfo"]).unwrap();
        assert!(cli.list.path.is_none());
    }

    #[test]
    fn test_leading_hyphen_reaches_the_validator() {
        let cli = Cli::try_parse_from(["dirinfo", "-weird"]).unwrap();
        assert_eq!(cli.list.path.as_deref(), Some("-weird"));
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["dirinfo", "/a", "/b"]).is_err());
    }
}
