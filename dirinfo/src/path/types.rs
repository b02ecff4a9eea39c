//! Core types for path handling.
//!
//! Both types are proofs: a [`ValidatedPath`] only exists after a successful
//! syntax check, and a [`NormalizedPath`] only exists after a validated path
//! went through segment trimming.

use std::fmt;
use std::path::Path;

use crate::path::PathDialect;

/// A path string that matches the grammar of its dialect.
///
/// Created through [`ValidatedPath::parse`](crate::path::ValidatedPath::parse).
///
/// # Examples
///
/// ```
/// use dirinfo::path::{PathDialect, ValidatedPath};
///
/// let validated = ValidatedPath::parse("/kat/kat2", PathDialect::RootSlash).unwrap();
/// assert_eq!(validated.as_str(), "/kat/kat2");
/// assert_eq!(validated.dialect(), PathDialect::RootSlash);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedPath {
    path: String,
    dialect: PathDialect,
}

impl ValidatedPath {
    /// Callers must have checked `path` against `dialect`.
    pub(crate) fn new_unchecked(path: String, dialect: PathDialect) -> Self {
        Self { path, dialect }
    }

    /// The validated string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The dialect the string was validated against.
    #[must_use]
    pub fn dialect(&self) -> PathDialect {
        self.dialect
    }
}

impl fmt::Display for ValidatedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// A validated path whose segments carry no surrounding whitespace.
///
/// # Examples
///
/// ```
/// use dirinfo::path::{PathDialect, ValidatedPath};
///
/// let validated = ValidatedPath::parse("/Home/ User /Docs", PathDialect::RootSlash).unwrap();
/// let normalized = validated.normalize();
/// assert_eq!(normalized.as_str(), "/Home/User/Docs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    path: String,
    dialect: PathDialect,
}

impl NormalizedPath {
    pub(crate) fn new_unchecked(path: String, dialect: PathDialect) -> Self {
        Self { path, dialect }
    }

    /// The normalized string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The normalized string as a filesystem path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.path)
    }

    /// The dialect of the path.
    #[must_use]
    pub fn dialect(&self) -> PathDialect {
        self.dialect
    }

    /// Convert into the owned string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
