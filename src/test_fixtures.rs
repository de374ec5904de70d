//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides:
//! - [`FakePackages`]: an in-memory package index implementing
//!   [`PackageManager`], recording every mutating call
//! - [`ScriptedExecutor`]: a [`ProgramExecutor`] that replays canned attempts
//! - [`FakePython`] (Unix only): a shell-script interpreter that emulates
//!   `python -m pip` and `python -c` so the real subprocess code paths can be
//!   exercised without a Python installation
//!
//! # Usage
//!
//! ```ignore
//! let packages = FakePackages::with_installed(&["requests"]);
//! install_from_manifest(&packages, &path)?;
//! assert_eq!(packages.calls(), vec!["install foo==1.0"]);
//! ```

#![allow(clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::path::Path;

use tempfile::TempDir;

use crate::error::{MydepsError, Result};
use crate::manifest::specifier::PIN_DELIMITER;
use crate::packages::PackageManager;
use crate::runner::{ProgramExecutor, ScriptExecution};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// In-memory package index
#[derive(Default)]
pub struct FakePackages {
    installed: RefCell<BTreeSet<String>>,
    calls: RefCell<Vec<String>>,
    freeze_output: String,
    fail_installs: bool,
    noop_installs: bool,
    fail_uninstalls: bool,
    fail_freeze: bool,
}

impl FakePackages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_installed(names: &[&str]) -> Self {
        let packages = Self::new();
        packages
            .installed
            .borrow_mut()
            .extend(names.iter().map(ToString::to_string));
        packages
    }

    #[must_use]
    pub fn with_freeze_output(mut self, output: &str) -> Self {
        self.freeze_output = output.to_string();
        self
    }

    /// Every install exits non-zero
    #[must_use]
    pub fn failing_installs(mut self) -> Self {
        self.fail_installs = true;
        self
    }

    /// Installs succeed but never make the module importable
    #[must_use]
    pub fn noop_installs(mut self) -> Self {
        self.noop_installs = true;
        self
    }

    /// Every uninstall exits non-zero
    #[must_use]
    pub fn failing_uninstalls(mut self) -> Self {
        self.fail_uninstalls = true;
        self
    }

    /// Freeze exits non-zero
    #[must_use]
    pub fn failing_freeze(mut self) -> Self {
        self.fail_freeze = true;
        self
    }

    /// Mutating calls in order, e.g. `install foo==1.0`, `uninstall foo`, `freeze`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.borrow().contains(name)
    }
}

impl PackageManager for FakePackages {
    fn install(&self, specifier: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("install {specifier}"));

        if self.fail_installs {
            return Err(MydepsError::InstallerInvocationFailed {
                specifier: specifier.to_string(),
                reason: "installer exited with exit status: 1".to_string(),
                code: Some(1),
            });
        }

        if !self.noop_installs {
            let name = specifier
                .split(PIN_DELIMITER)
                .next()
                .unwrap_or(specifier);
            self.installed.borrow_mut().insert(name.to_string());
        }
        Ok(())
    }

    fn uninstall(&self, name: &str) -> Result<()> {
        self.calls.borrow_mut().push(format!("uninstall {name}"));

        if self.fail_uninstalls {
            return Err(MydepsError::UninstallerInvocationFailed {
                name: name.to_string(),
                reason: "uninstaller exited with exit status: 3".to_string(),
                code: Some(3),
            });
        }
        self.installed.borrow_mut().remove(name);
        Ok(())
    }

    fn freeze(&self) -> Result<String> {
        self.calls.borrow_mut().push("freeze".to_string());

        if self.fail_freeze {
            return Err(MydepsError::FreezeFailed {
                reason: "pip freeze exited with exit status: 4".to_string(),
            });
        }
        Ok(self.freeze_output.clone())
    }

    fn is_resolvable(&self, name: &str) -> Result<bool> {
        Ok(self.is_installed(name))
    }
}

/// Executor that replays a fixed sequence of attempts
pub struct ScriptedExecutor {
    attempts: VecDeque<ScriptExecution>,
    runs: usize,
    seen_args: Vec<Vec<String>>,
}

impl ScriptedExecutor {
    pub fn new(attempts: Vec<ScriptExecution>) -> Self {
        Self {
            attempts: attempts.into(),
            runs: 0,
            seen_args: Vec::new(),
        }
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn seen_args(&self) -> &[Vec<String>] {
        &self.seen_args
    }
}

impl ProgramExecutor for ScriptedExecutor {
    fn execute(&mut self, _script: &Path, args: &[String]) -> Result<ScriptExecution> {
        self.runs += 1;
        self.seen_args.push(args.to_vec());
        Ok(self
            .attempts
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedExecutor ran out of attempts")))
    }
}

#[cfg(unix)]
#[path = "../tests/common/fake_python.rs"]
mod fake_python;

#[cfg(unix)]
pub use fake_python::FakePython;
