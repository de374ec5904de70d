//! Resilient script runner
//!
//! Runs a target program and, whenever it dies because an import cannot be
//! resolved, installs the missing module and runs the program again from
//! the beginning. Any other failure ends the loop and is surfaced unchanged.
//!
//! ```text
//! Running --(zero exit)--------------------> Succeeded
//! Running --(non-zero, unrelated)----------> Failed (ScriptFailed)
//! Running --(non-zero, missing module)-----> Repairing
//! Repairing --(budget spent / repeat)------> Failed (RepairExhausted)
//! Repairing --(install fails)--------------> Failed (InstallerInvocationFailed)
//! Repairing --(install ok)-----------------> Running
//! ```

pub mod classifier;
pub mod execution;

use std::path::Path;

use crate::error::{MydepsError, Result};
use crate::packages::PackageManager;
use crate::ui;

pub use classifier::{FailureClassifier, ModuleNotFoundClassifier};
pub use execution::{ExitOutcome, ProgramExecutor, PythonExecutor, ScriptExecution};

/// Default cap on repair installs per run
pub const DEFAULT_MAX_REPAIRS: usize = 10;

/// Bounds the repair loop
///
/// A run stops repairing once `max_repairs` modules have been installed, or
/// as soon as a module that was already installed during this run is
/// reported missing again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepairPolicy {
    pub max_repairs: usize,
}

impl Default for RepairPolicy {
    fn default() -> Self {
        Self {
            max_repairs: DEFAULT_MAX_REPAIRS,
        }
    }
}

impl RepairPolicy {
    pub fn new(max_repairs: usize) -> Self {
        Self { max_repairs }
    }

    fn allows(&self, repaired: &[String], module: &str) -> bool {
        repaired.len() < self.max_repairs && !repaired.iter().any(|m| m == module)
    }
}

/// Summary of a successful run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of times the program was started
    pub attempts: usize,
    /// Modules installed along the way, in order
    pub repaired: Vec<String>,
}

/// Runs a program, installing modules it turns out to be missing
pub struct ScriptRunner<'a> {
    packages: &'a dyn PackageManager,
    executor: &'a mut dyn ProgramExecutor,
    classifier: &'a dyn FailureClassifier,
    policy: RepairPolicy,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(
        packages: &'a dyn PackageManager,
        executor: &'a mut dyn ProgramExecutor,
        classifier: &'a dyn FailureClassifier,
    ) -> Self {
        Self {
            packages,
            executor,
            classifier,
            policy: RepairPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: RepairPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run `script` until it succeeds or fails for a reason other than a
    /// missing module
    pub fn run(&mut self, script: &Path, args: &[String]) -> Result<RunReport> {
        let mut report = RunReport::default();

        loop {
            report.attempts += 1;
            let execution = self.executor.execute(script, args)?;

            match execution.classify(self.classifier) {
                ExitOutcome::Success => return Ok(report),
                ExitOutcome::NonZeroExit { code } => {
                    return Err(MydepsError::ScriptFailed {
                        script: script.display().to_string(),
                        code,
                    });
                }
                ExitOutcome::MissingDependency { module } => {
                    self.repair(module, &mut report)?;
                }
            }
        }
    }

    fn repair(&self, module: String, report: &mut RunReport) -> Result<()> {
        if !self.policy.allows(&report.repaired, &module) {
            return Err(MydepsError::RepairExhausted {
                module,
                repairs: report.repaired.len(),
            });
        }

        ui::warning(format!("Module '{module}' is missing. Installing..."));
        self.packages.install(&module)?;
        ui::success(format!("Module '{module}' installed. Retrying..."));

        report.repaired.push(module);
        Ok(())
    }
}
