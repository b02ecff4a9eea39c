//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated home directory so no user configuration is picked up
//! - A scratch directory to list, with file fixtures
//! - Command builder helpers with a deterministic environment

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that influence a run and are cleared by default.
const DIRINFO_VARS: [&str; 5] = [
    "DIRINFO_CONFIG",
    "DIRINFO_WIDTH",
    "DIRINFO_TIME_FORMAT",
    "DIRINFO_PRESERVE_CASE",
    "DIRINFO_LOG_MODE",
];

/// Test environment with an isolated home and a directory to list.
pub struct TestEnv {
    /// Temporary home directory (kept alive for the duration of the test)
    home: TempDir,
    /// Temporary directory whose files get listed
    listed: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty directory to list.
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("Failed to create home dir"),
            listed: tempfile::tempdir().expect("Failed to create listed dir"),
        }
    }

    /// Get a command builder with no `DIRINFO_*` variables set.
    ///
    /// Temp directory names contain upper-case letters, so tests that list
    /// real directories should use [`TestEnv::command`] instead, which keeps
    /// the argument's case.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("dirinfo").expect("Failed to find dirinfo binary");
        cmd.env("HOME", self.home.path())
            .env("USERPROFILE", self.home.path());
        for var in DIRINFO_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder that preserves the case of the path argument.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env("DIRINFO_PRESERVE_CASE", "1");
        cmd
    }

    /// The directory to list.
    pub fn dir(&self) -> &Path {
        self.listed.path()
    }

    /// The directory to list, as a command-line argument.
    pub fn dir_arg(&self) -> String {
        self.dir().to_str().expect("temp path is UTF-8").to_string()
    }

    /// The isolated home directory.
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Create a file in the listed directory.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, name).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the listed directory.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a configuration file into the home directory and return its path.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let dir = self.home().join(".dirinfo");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Run `dirinfo <dir>` and return stdout.
    pub fn list(&self) -> String {
        let output = self
            .command()
            .arg(self.dir_arg())
            .output()
            .expect("Failed to run dirinfo");

        assert!(
            output.status.success(),
            "dirinfo failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A labeled metadata line exactly as the listing renders it.
#[allow(dead_code)]
pub fn field_line(label: &str, value: &str) -> String {
    format!("{label:<26} {value}")
}
