//! Common test utilities for integration tests.
//!
//! This module provides helper functions and collaborators for testing the
//! dirinfo library against real temporary directories.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dirinfo::listing::FixedWidthTerminal;
use dirinfo::{
    FileMetadataRecord, FileSystem, ListingOptions, ListingOrchestrator, ListingReport,
    PathDialect, SystemFileSystem,
};

/// Creates a temporary directory holding the named files.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn dir_with_files(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for name in names {
        fs::write(dir.path().join(name), name).expect("Failed to write fixture");
    }
    dir
}

/// The path of a temporary directory as a command-line style argument.
#[allow(dead_code)]
pub fn arg(path: &Path) -> String {
    path.to_str().expect("temp path is UTF-8").to_string()
}

/// Options that keep the argument's case, since temp paths are mixed-case.
#[allow(dead_code)]
pub fn case_preserving(width: Option<usize>) -> ListingOptions {
    ListingOptions {
        preserve_case: true,
        width,
        ..ListingOptions::default()
    }
}

/// Run a listing of `raw` against `fs` and return the report and output.
#[allow(dead_code)]
pub fn run_listing<F: FileSystem>(
    fs: F,
    dialect: PathDialect,
    options: ListingOptions,
    raw: Option<&str>,
) -> (ListingReport, String) {
    let orchestrator =
        ListingOrchestrator::new(fs, FixedWidthTerminal::new(80), dialect).with_options(options);
    let mut out = Vec::new();
    let report = orchestrator
        .run(raw, &mut out)
        .expect("writing to a Vec cannot fail");
    (report, String::from_utf8(out).expect("output is UTF-8"))
}

/// The real filesystem, except that metadata reads of the named files fail
/// with `PermissionDenied`.
#[allow(dead_code)]
pub struct DenyingFileSystem {
    denied: HashSet<OsString>,
}

#[allow(dead_code)]
impl DenyingFileSystem {
    /// Deny metadata access to files with any of `names`.
    pub fn new(names: &[&str]) -> Self {
        Self {
            denied: names.iter().map(OsString::from).collect(),
        }
    }
}

impl FileSystem for DenyingFileSystem {
    fn directory_exists(&self, path: &Path) -> bool {
        SystemFileSystem.directory_exists(path)
    }

    fn list_immediate_files(&self, path: &Path) -> io::Result<Vec<PathBuf>> {
        SystemFileSystem.list_immediate_files(path)
    }

    fn file_metadata(&self, path: &Path) -> io::Result<FileMetadataRecord> {
        match path.file_name() {
            Some(name) if self.denied.contains(name) => {
                Err(io::Error::from(io::ErrorKind::PermissionDenied))
            }
            _ => SystemFileSystem.file_metadata(path),
        }
    }
}

/// A labeled metadata line exactly as the listing renders it.
#[allow(dead_code)]
pub fn field_line(label: &str, value: &str) -> String {
    format!("{label:<26} {value}")
}
