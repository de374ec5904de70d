//! pip-backed package manager
//!
//! This module handles:
//! - `pip install <specifier>` / `pip uninstall -y <name>` / `pip freeze`
//! - Import checks through the configured interpreter

use std::process::{Command, ExitStatus, Stdio};

use crate::error::{self, Result};
use crate::packages::PackageManager;
use crate::ui;

/// Imports the module named by the first argument; exits non-zero if that fails
const IMPORT_CHECK: &str = "import sys; __import__(sys.argv[1])";

/// Package manager that drives `<python> -m pip`
#[derive(Debug, Clone)]
pub struct Pip {
    python: String,
    verbose: bool,
}

impl Pip {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            verbose: false,
        }
    }

    /// Echo every spawned command on stderr
    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        if self.verbose {
            ui::command(&self.python, args);
        }
        let mut cmd = Command::new(&self.python);
        cmd.args(args);
        cmd
    }

    fn pip_status(&self, args: &[&str]) -> Result<ExitStatus> {
        self.command(args)
            .status()
            .map_err(|e| error::process::interpreter_not_found(&self.python, &e))
    }
}

impl PackageManager for Pip {
    fn install(&self, specifier: &str) -> Result<()> {
        let status = self.pip_status(&["-m", "pip", "install", specifier])?;
        if !status.success() {
            return Err(error::process::install_failed(specifier, status));
        }
        Ok(())
    }

    fn uninstall(&self, name: &str) -> Result<()> {
        let status = self.pip_status(&["-m", "pip", "uninstall", "-y", name])?;
        if !status.success() {
            return Err(error::process::uninstall_failed(name, status));
        }
        Ok(())
    }

    fn freeze(&self) -> Result<String> {
        let output = self
            .command(&["-m", "pip", "freeze"])
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| error::process::interpreter_not_found(&self.python, &e))?;

        if !output.status.success() {
            return Err(error::process::freeze_failed(format!(
                "pip freeze exited with {}",
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn is_resolvable(&self, name: &str) -> Result<bool> {
        let status = self
            .command(&["-c", IMPORT_CHECK, name])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| error::process::interpreter_not_found(&self.python, &e))?;

        Ok(status.success())
    }
}
