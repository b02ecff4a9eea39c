//! Segment whitespace normalization.
//!
//! Normalization trims whitespace around every segment of a validated path
//! and joins the segments back with the dialect's separator. The root marker
//! is kept as-is:
//! - drive-rooted paths never touch the leading `d:` segment and keep empty
//!   segments in place
//! - root-slash paths drop empty segments and re-prefix every survivor with
//!   `/`

use crate::path::types::{NormalizedPath, ValidatedPath};
use crate::path::PathDialect;

/// Trim every segment of `path` according to `dialect`.
///
/// The input is expected to satisfy
/// [`is_path_syntax_correct`](crate::path::is_path_syntax_correct) for
/// `dialect`; other inputs produce an unspecified (but panic-free) result.
/// Prefer [`ValidatedPath::normalize`] which enforces that.
///
/// # Examples
///
/// ```
/// use dirinfo::path::normalize::trim_segments;
/// use dirinfo::path::PathDialect;
///
/// assert_eq!(
///     trim_segments("/Home/ User /Docs", PathDialect::RootSlash),
///     "/Home/User/Docs"
/// );
/// assert_eq!(
///     trim_segments("d:\\ Folder1 \\ Folder2 ", PathDialect::DriveRooted),
///     "d:\\Folder1\\Folder2"
/// );
/// ```
#[must_use]
pub fn trim_segments(path: &str, dialect: PathDialect) -> String {
    match dialect {
        PathDialect::DriveRooted => trim_drive_rooted(path),
        PathDialect::RootSlash => trim_root_slash(path),
    }
}

fn trim_drive_rooted(path: &str) -> String {
    let separator = PathDialect::DriveRooted.separator();
    let mut segments = path.split(separator);
    let drive = segments.next().unwrap_or_default();

    let mut trimmed = String::with_capacity(path.len());
    trimmed.push_str(drive);
    for segment in segments {
        trimmed.push(separator);
        trimmed.push_str(segment.trim());
    }

    let trimmed = trimmed.trim_end_matches(separator);
    if trimmed == drive {
        // Bare drive: keep the root separator, `d:` alone means something else.
        format!("{drive}{separator}")
    } else {
        trimmed.to_string()
    }
}

fn trim_root_slash(path: &str) -> String {
    let separator = PathDialect::RootSlash.separator();
    let mut trimmed = String::with_capacity(path.len());
    for segment in path
        .split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
    {
        trimmed.push(separator);
        trimmed.push_str(segment);
    }

    if trimmed.is_empty() {
        trimmed.push(separator);
    }
    trimmed
}

impl ValidatedPath {
    /// Trim whitespace around every segment.
    #[must_use]
    pub fn normalize(&self) -> NormalizedPath {
        let dialect = self.dialect();
        NormalizedPath::new_unchecked(trim_segments(self.as_str(), dialect), dialect)
    }
}
