//! Directory listing.
//!
//! This module wires the pure path logic to the outside world. The
//! filesystem and the terminal are collaborators behind traits
//! ([`FileSystem`], [`Terminal`]); [`ListingOrchestrator`] sequences them.
//!
//! # Failure scopes
//!
//! - Validation and existence failures stop the run before anything is
//!   enumerated.
//! - A failure to enumerate the directory stops the run after one
//!   diagnostic.
//! - A failure to read one file's metadata is printed and the listing moves
//!   on to the next file.

pub mod fs;
pub mod orchestrator;
pub mod record;
pub mod terminal;

pub use fs::{FileSystem, SystemFileSystem};
pub use orchestrator::{prepare_input, ListingOptions, ListingOrchestrator, ListingReport};
pub use record::FileMetadataRecord;
pub use terminal::{FixedWidthTerminal, SystemTerminal, Terminal, DEFAULT_WIDTH};
