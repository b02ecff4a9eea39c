//! Error types for the dirinfo library.
//!
//! Every failure the listing can run into is a variant of [`Error`]. Variants
//! raised while reading the listed directory carry an [`ErrorScope`], so the
//! orchestrator can decide whether to continue with the next file or abort
//! the whole run without inspecting the variant itself.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::path::PathDialect;

/// Result type alias for operations that may fail with a dirinfo error.
///
/// # Examples
///
/// ```
/// use dirinfo::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(80)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Hint shown next to path-too-long failures.
pub const PATH_TOO_LONG_HINT: &str = "Path-too-long errors are sometimes caused by a single \
directory or file name that is too long, not by the total length of the path.";

/// How far a failure reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// Only the current file is affected; the listing continues.
    PerFile,
    /// The whole run is affected; nothing else is listed.
    WholeRun,
}

impl fmt::Display for ErrorScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerFile => write!(f, "per-file"),
            Self::WholeRun => write!(f, "whole-run"),
        }
    }
}

/// The main error type for the dirinfo library.
#[derive(Debug, Error)]
pub enum Error {
    /// No directory path was given on the command line.
    #[error("missing directory path parameter")]
    MissingArgument,

    /// The path does not match the grammar of the host dialect.
    #[error("invalid path format for {}: {path}", dialect.description())]
    InvalidSyntax {
        /// The rejected input.
        path: String,
        /// The dialect the input was checked against.
        dialect: PathDialect,
    },

    /// The normalized path is not an existing directory.
    #[error("directory does not exist: {}", path.display())]
    DirectoryNotFound {
        /// The directory that was looked up.
        path: PathBuf,
    },

    /// The directory could not be enumerated due to missing permissions.
    #[error("access to directory {} denied: {source}", path.display())]
    DirectoryAccessDenied {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The directory path is too long for the operating system.
    #[error("directory path too long: {}: {source}", path.display())]
    DirectoryPathTooLong {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A single file's metadata could not be read due to missing permissions.
    #[error("access to file {} denied: {source}", path.display())]
    FileAccessDenied {
        /// The file whose metadata was requested.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A single file's path is too long for the operating system.
    #[error("file path too long: {}: {source}", path.display())]
    FilePathTooLong {
        /// The file whose metadata was requested.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure while listing.
    #[error("I/O error for {}: {source}", path.display())]
    UnclassifiedIo {
        /// The directory or file involved.
        path: PathBuf,
        /// Whether the failure aborts the run.
        scope: ErrorScope,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value is invalid.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An I/O error outside of the listing itself (e.g. reading config).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Classify a failure to enumerate the listed directory.
    ///
    /// The result always has [`ErrorScope::WholeRun`].
    #[must_use]
    pub fn from_directory_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match IoFailure::classify(&source) {
            IoFailure::AccessDenied => Self::DirectoryAccessDenied { path, source },
            IoFailure::PathTooLong => Self::DirectoryPathTooLong { path, source },
            IoFailure::Other => Self::UnclassifiedIo {
                path,
                scope: ErrorScope::WholeRun,
                source,
            },
        }
    }

    /// Classify a failure to read a single file's metadata.
    ///
    /// The result always has [`ErrorScope::PerFile`].
    #[must_use]
    pub fn from_file_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match IoFailure::classify(&source) {
            IoFailure::AccessDenied => Self::FileAccessDenied { path, source },
            IoFailure::PathTooLong => Self::FilePathTooLong { path, source },
            IoFailure::Other => Self::UnclassifiedIo {
                path,
                scope: ErrorScope::PerFile,
                source,
            },
        }
    }

    /// Whether this failure only affects one file or the whole run.
    ///
    /// Validation and existence failures happen before any file is touched
    /// and count as whole-run.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirinfo::{Error, ErrorScope};
    /// use std::path::Path;
    ///
    /// let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
    /// let err = Error::from_file_io(Path::new("/tmp/secret"), denied);
    /// assert_eq!(err.scope(), ErrorScope::PerFile);
    /// ```
    #[must_use]
    pub fn scope(&self) -> ErrorScope {
        match self {
            Self::FileAccessDenied { .. } | Self::FilePathTooLong { .. } => ErrorScope::PerFile,
            Self::UnclassifiedIo { scope, .. } => *scope,
            _ => ErrorScope::WholeRun,
        }
    }

    /// Extra guidance printed after the message, if any.
    #[must_use]
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::DirectoryPathTooLong { .. } | Self::FilePathTooLong { .. } => {
                Some(PATH_TOO_LONG_HINT)
            }
            _ => None,
        }
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(
            self,
            Self::DirectoryAccessDenied { .. } | Self::FileAccessDenied { .. }
        )
    }
}

/// Coarse classification of an `io::Error` for listing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IoFailure {
    AccessDenied,
    PathTooLong,
    Other,
}

impl IoFailure {
    fn classify(err: &io::Error) -> Self {
        let failure = if err.kind() == io::ErrorKind::PermissionDenied {
            Self::AccessDenied
        } else if err.raw_os_error() == Some(NAME_TOO_LONG) {
            Self::PathTooLong
        } else {
            Self::Other
        };
        log::debug!("classified I/O error {err:?} as {failure:?}");
        failure
    }
}

#[cfg(unix)]
const NAME_TOO_LONG: i32 = libc::ENAMETOOLONG;

// ERROR_FILENAME_EXCED_RANGE
#[cfg(windows)]
const NAME_TOO_LONG: i32 = 206;

#[cfg(not(any(unix, windows)))]
const NAME_TOO_LONG: i32 = -1;

#[cfg(test)]
mod tests {
    use super::*;

    fn denied() -> io::Error {
        io::Error::from(io::ErrorKind::PermissionDenied)
    }

    fn too_long() -> io::Error {
        io::Error::from_raw_os_error(NAME_TOO_LONG)
    }

    #[test]
    fn test_missing_argument_display() {
        let display = format!("{}", Error::MissingArgument);
        assert!(display.contains("missing directory path"));
    }

    #[test]
    fn test_invalid_syntax_names_dialect() {
        let err = Error::InvalidSyntax {
            path: "relative/path".to_string(),
            dialect: PathDialect::RootSlash,
        };
        let display = format!("{err}");
        assert!(display.contains("Unix-type"));
        assert!(display.contains("relative/path"));
    }

    #[test]
    fn test_directory_not_found_display() {
        let err = Error::DirectoryNotFound {
            path: PathBuf::from("/nonexistent"),
        };
        let display = format!("{err}").replace(std::path::MAIN_SEPARATOR, "/");
        assert!(display.contains("does not exist"));
        assert!(display.contains("/nonexistent"));
    }

    #[test]
    fn test_directory_io_classification() {
        let dir = Path::new("/restricted");

        let err = Error::from_directory_io(dir, denied());
        assert!(matches!(err, Error::DirectoryAccessDenied { .. }));
        assert!(err.is_permission_denied());
        assert_eq!(err.scope(), ErrorScope::WholeRun);

        let err = Error::from_directory_io(dir, io::Error::other("boom"));
        assert!(matches!(
            err,
            Error::UnclassifiedIo {
                scope: ErrorScope::WholeRun,
                ..
            }
        ));
    }

    #[test]
    fn test_file_io_classification() {
        let file = Path::new("/restricted/file.txt");

        let err = Error::from_file_io(file, denied());
        assert!(matches!(err, Error::FileAccessDenied { .. }));
        assert_eq!(err.scope(), ErrorScope::PerFile);

        let err = Error::from_file_io(file, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.scope(), ErrorScope::PerFile);
        assert!(err.hint().is_none());
    }

    #[test]
    #[cfg(any(unix, windows))]
    fn test_path_too_long_carries_hint() {
        let err = Error::from_file_io(Path::new("/a"), too_long());
        assert!(matches!(err, Error::FilePathTooLong { .. }));
        assert_eq!(err.hint(), Some(PATH_TOO_LONG_HINT));

        let err = Error::from_directory_io(Path::new("/a"), too_long());
        assert!(matches!(err, Error::DirectoryPathTooLong { .. }));
        assert_eq!(err.scope(), ErrorScope::WholeRun);
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_pre_listing_errors_are_whole_run() {
        assert_eq!(Error::MissingArgument.scope(), ErrorScope::WholeRun);
        let err = Error::DirectoryNotFound {
            path: PathBuf::from("/x"),
        };
        assert_eq!(err.scope(), ErrorScope::WholeRun);
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "width".to_string(),
            message: "must be at least 1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("width"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_scope_display() {
        assert_eq!(format!("{}", ErrorScope::PerFile), "per-file");
        assert_eq!(format!("{}", ErrorScope::WholeRun), "whole-run");
    }
}
