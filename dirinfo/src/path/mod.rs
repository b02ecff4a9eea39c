//! Path handling for a single directory argument.
//!
//! This module holds the only algorithmic logic of dirinfo. Everything here is
//! pure: no filesystem access, no terminal access.
//!
//! # Key Concepts
//!
//! ## Dialects
//!
//! A [`PathDialect`] is one of two path grammars: drive-rooted (`d:\kat`) or
//! root-slash (`/kat/kat2`). The dialect is picked once per run from the
//! host and passed into every function below.
//!
//! ## Validation
//!
//! [`is_path_syntax_correct`] checks a string against a dialect's grammar.
//! [`ValidatedPath::parse`] turns a successful check into a typed value.
//!
//! ## Normalization
//!
//! [`ValidatedPath::normalize`] trims whitespace around every segment while
//! keeping the root marker and separators in place. It is idempotent.
//!
//! ## Wrapping
//!
//! [`wrap_path`] renders a path as a lazy sequence of [`DisplayLine`]s that
//! break only between segments.
//!
//! # Examples
//!
//! ```
//! use dirinfo::path::{wrap_path, PathDialect, ValidatedPath};
//!
//! let dialect = PathDialect::RootSlash;
//! let path = ValidatedPath::parse("/home/ user /docs", dialect).unwrap().normalize();
//! assert_eq!(path.as_str(), "/home/user/docs");
//!
//! let lines: Vec<String> = wrap_path(path.as_str(), dialect, 80)
//!     .map(|line| line.to_string())
//!     .collect();
//! assert_eq!(lines, ["", "/home/user/docs", ""]);
//! ```

pub mod dialect;
pub mod normalize;
pub mod syntax;
mod types;
pub mod wrap;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use dialect::PathDialect;
pub use syntax::is_path_syntax_correct;
pub use types::{NormalizedPath, ValidatedPath};
pub use wrap::{wrap_path, DisplayLine, PathLines};
