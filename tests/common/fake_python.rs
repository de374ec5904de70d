//! Fake Python interpreter shared by unit and integration tests
//!
//! The interpreter is `fake_python.sh`: it emulates `python -m pip` and
//! `python -c` so the real subprocess code paths run without a Python
//! installation.

#![allow(dead_code, clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

const FAKE_PYTHON: &str = include_str!("fake_python.sh");

/// Fake Python interpreter backed by a temp directory
///
/// Installed packages are files under `site/`; pip invocations are appended
/// to `calls.log`. Scripts are run with `sh` and see `$SITE`. Marker files
/// (`fail-install`, `noop-install`, `fail-uninstall`, `fail-freeze`) switch
/// failure modes on.
pub struct FakePython {
    temp: TempDir,
}

impl FakePython {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let program = temp.path().join("python");
        std::fs::write(&program, FAKE_PYTHON).expect("Failed to write fake python");
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake python executable");
        std::fs::create_dir_all(temp.path().join("site")).expect("Failed to create site dir");
        std::fs::write(temp.path().join("freeze.txt"), "").expect("Failed to write freeze.txt");

        Self { temp }
    }

    pub fn program(&self) -> String {
        self.temp.path().join("python").display().to_string()
    }

    pub fn preinstall(&self, name: &str) {
        std::fs::write(self.temp.path().join("site").join(name), "")
            .expect("Failed to preinstall package");
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.temp.path().join("site").join(name).exists()
    }

    /// `pip install` exits 2
    pub fn fail_installs(&self) {
        self.mark("fail-install");
    }

    /// Installs succeed without making anything importable
    pub fn noop_installs(&self) {
        self.mark("noop-install");
    }

    /// `pip uninstall` exits 3
    pub fn fail_uninstalls(&self) {
        self.mark("fail-uninstall");
    }

    /// `pip freeze` exits 4
    pub fn fail_freeze(&self) {
        self.mark("fail-freeze");
    }

    pub fn set_freeze_output(&self, output: &str) {
        std::fs::write(self.temp.path().join("freeze.txt"), output)
            .expect("Failed to write freeze.txt");
    }

    /// Write a script for the fake interpreter to run
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, body).expect("Failed to write script");
        path
    }

    /// pip invocations so far, one entry per call
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.temp.path().join("calls.log"))
            .map(|log| log.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    fn mark(&self, marker: &str) {
        std::fs::write(self.temp.path().join(marker), "")
            .unwrap_or_else(|e| panic!("Failed to write {marker} marker: {e}"));
    }
}
