//! Common test utilities for mydeps integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Get a command for the REAL mydeps binary, run from `dir`
///
/// Environment overrides are cleared so the host shell cannot leak into tests.
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn mydeps_cmd(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("mydeps").unwrap();
    cmd.current_dir(dir)
        .env_remove("MYDEPS_PYTHON")
        .env_remove("MYDEPS_CONFIG");
    cmd
}

/// A test workspace for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    pub fn cmd(&self) -> assert_cmd::Command {
        mydeps_cmd(&self.path)
    }
}

#[cfg(unix)]
mod fake_python;

#[cfg(unix)]
pub use fake_python::FakePython;
