//! CLI command implementations.
//!
//! - `list`: validate a directory path and list its files

pub mod list;

pub use list::ListCommand;
