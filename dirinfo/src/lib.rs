#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # dirinfo
//!
//! A library for validating directory paths and listing the files they
//! contain together with their timestamps and attribute flags.
//!
//! ## Core Types
//!
//! - [`PathDialect`], [`ValidatedPath`] and [`NormalizedPath`]: path syntax
//!   checking and segment whitespace normalization
//! - [`wrap_path`]: segment-boundary wrapping for narrow outputs
//! - [`ListingOrchestrator`]: the end-to-end listing pipeline
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use dirinfo::{is_path_syntax_correct, PathDialect, ValidatedPath};
//!
//! assert!(is_path_syntax_correct("/home/user", PathDialect::RootSlash));
//! assert!(!is_path_syntax_correct("home/user", PathDialect::RootSlash));
//!
//! let path = ValidatedPath::parse("d:\\ Folder1 \\ Folder2", PathDialect::DriveRooted).unwrap();
//! assert_eq!(path.normalize().as_str(), "d:\\Folder1\\Folder2");
//! ```

pub mod config;
pub mod error;
pub mod listing;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorScope, Result};
pub use listing::{
    FileMetadataRecord, FileSystem, ListingOptions, ListingOrchestrator, ListingReport,
    SystemFileSystem, SystemTerminal, Terminal,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::ReportFormat;
pub use path::{
    is_path_syntax_correct, wrap_path, DisplayLine, NormalizedPath, PathDialect, ValidatedPath,
};
