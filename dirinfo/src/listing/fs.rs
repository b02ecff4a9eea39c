//! Filesystem collaborators.
//!
//! The orchestrator only talks to the filesystem through the [`FileSystem`]
//! trait, so tests can swap in mocks or fixtures.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::listing::record::FileMetadataRecord;

/// Access to the filesystem operations dirinfo needs.
///
/// # Examples
///
/// ```no_run
/// use dirinfo::listing::{FileSystem, SystemFileSystem};
/// use std::path::Path;
///
/// let fs = SystemFileSystem;
/// if fs.directory_exists(Path::new("/tmp")) {
///     for file in fs.list_immediate_files(Path::new("/tmp")).unwrap() {
///         println!("{}", file.display());
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Whether `path` names an existing directory.
    fn directory_exists(&self, path: &Path) -> bool;

    /// Files directly inside `path`. Subdirectories are skipped and nothing
    /// is traversed recursively. The order is whatever the OS yields.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory itself cannot be read.
    fn list_immediate_files(&self, path: &Path) -> io::Result<Vec<PathBuf>>;

    /// Timestamps and attribute flags of one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file's metadata cannot be read.
    fn file_metadata(&self, path: &Path) -> io::Result<FileMetadataRecord>;
}

/// The real filesystem, through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFileSystem;

impl FileSystem for SystemFileSystem {
    fn directory_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_immediate_files(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let entry_path = entry.path();

            // Symlinks count when they point at a file.
            if file_type.is_file() || (file_type.is_symlink() && entry_path.is_file()) {
                files.push(entry_path);
            }
        }
        log::debug!("found {} file(s) in {}", files.len(), path.display());
        Ok(files)
    }

    fn file_metadata(&self, path: &Path) -> io::Result<FileMetadataRecord> {
        let metadata = fs::metadata(path)?;
        Ok(FileMetadataRecord {
            path: path.to_path_buf(),
            created: metadata.created().ok(),
            accessed: metadata.accessed().ok(),
            modified: metadata.modified().ok(),
            hidden: is_hidden(path, &metadata),
            read_only: metadata.permissions().readonly(),
        })
    }
}

#[cfg(windows)]
fn is_hidden(_path: &Path, metadata: &fs::Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
fn is_hidden(path: &Path, _metadata: &fs::Metadata) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}
