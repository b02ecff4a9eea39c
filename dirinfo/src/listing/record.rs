//! Per-file metadata.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Metadata of one listed file.
///
/// Timestamps are `None` when the platform or filesystem does not report
/// them (creation time is missing on many Linux filesystems, for example).
///
/// # Examples
///
/// ```
/// use dirinfo::FileMetadataRecord;
/// use std::path::Path;
///
/// let record = FileMetadataRecord::new(Path::new("/tmp/notes.txt"));
/// assert!(!record.hidden);
/// assert!(record.created.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetadataRecord {
    /// Full path of the file as produced by enumeration.
    pub path: PathBuf,
    /// Creation time.
    pub created: Option<SystemTime>,
    /// Last-access time.
    pub accessed: Option<SystemTime>,
    /// Last-write time.
    pub modified: Option<SystemTime>,
    /// Hidden flag.
    pub hidden: bool,
    /// Read-only flag.
    pub read_only: bool,
}

impl FileMetadataRecord {
    /// A record for `path` with no timestamps and both flags cleared.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            created: None,
            accessed: None,
            modified: None,
            hidden: false,
            read_only: false,
        }
    }

    /// The path as text, for display.
    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}
