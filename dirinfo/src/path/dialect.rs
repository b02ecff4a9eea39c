//! Path dialects.
//!
//! A dialect is one of the two path grammars dirinfo understands. It is
//! chosen once per run from the host operating system and passed explicitly
//! to every function that needs it.

use std::fmt;

/// The path grammar of a host operating system family.
///
/// # Examples
///
/// ```
/// use dirinfo::path::PathDialect;
///
/// assert_eq!(PathDialect::RootSlash.separator(), '/');
/// assert_eq!(PathDialect::DriveRooted.separator(), '\\');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathDialect {
    /// Drive-letter rooted paths such as `d:\kat`.
    DriveRooted,
    /// Root-slash rooted paths such as `/kat/kat2`.
    RootSlash,
}

impl PathDialect {
    /// The dialect of the operating system this binary runs on.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::DriveRooted
        } else {
            Self::RootSlash
        }
    }

    /// Segment separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::DriveRooted => '\\',
            Self::RootSlash => '/',
        }
    }

    /// Example of a well-formed path, shown when validation fails.
    #[must_use]
    pub const fn expected_pattern(self) -> &'static str {
        match self {
            Self::DriveRooted => "d:\\kat",
            Self::RootSlash => "/kat/kat2",
        }
    }

    /// Human-readable name of the host family using this dialect.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DriveRooted => "Windows",
            Self::RootSlash => "Unix-type systems",
        }
    }

    /// The root marker a wrapped line starts with before any segment.
    ///
    /// Drive-rooted paths carry their root in the first segment (`d:`), so
    /// they start from an empty line.
    pub(crate) const fn line_root(self) -> &'static str {
        match self {
            Self::DriveRooted => "",
            Self::RootSlash => "/",
        }
    }
}

impl fmt::Display for PathDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DriveRooted => write!(f, "drive-rooted"),
            Self::RootSlash => write!(f, "root-slash"),
        }
    }
}
