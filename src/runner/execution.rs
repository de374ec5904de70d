//! Target program execution
//!
//! One [`ScriptExecution`] per attempt. The real executor runs
//! `<python> <script> [args...]` with stdin and stdout attached to the
//! terminal. stderr is relayed to the terminal as it arrives and captured
//! for classification.

use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{ChildStderr, Command, Stdio};
use std::thread;

use crate::error::{self, MydepsError, Result};
use crate::runner::classifier::FailureClassifier;
use crate::ui;

/// How an attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    NonZeroExit { code: Option<i32> },
    /// A non-zero exit reinterpreted as an unresolved import
    MissingDependency { module: String },
}

/// Result of a single attempt at running the target program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptExecution {
    pub outcome: ExitOutcome,
    pub stderr: String,
}

impl ScriptExecution {
    #[cfg(test)]
    pub fn success() -> Self {
        Self {
            outcome: ExitOutcome::Success,
            stderr: String::new(),
        }
    }

    pub fn failure(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            outcome: ExitOutcome::NonZeroExit { code },
            stderr: stderr.into(),
        }
    }

    /// Reinterpret a non-zero exit as a missing dependency when the
    /// classifier recognizes the diagnostic text
    pub fn classify(self, classifier: &dyn FailureClassifier) -> ExitOutcome {
        match self.outcome {
            ExitOutcome::NonZeroExit { code } => match classifier.missing_module(&self.stderr) {
                Some(module) => ExitOutcome::MissingDependency { module },
                None => ExitOutcome::NonZeroExit { code },
            },
            outcome => outcome,
        }
    }
}

/// Runs the target program once per call
pub trait ProgramExecutor {
    fn execute(&mut self, script: &Path, args: &[String]) -> Result<ScriptExecution>;
}

/// Executes scripts with a Python interpreter
#[derive(Debug, Clone)]
pub struct PythonExecutor {
    python: String,
    verbose: bool,
}

impl PythonExecutor {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
            verbose: false,
        }
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl ProgramExecutor for PythonExecutor {
    fn execute(&mut self, script: &Path, args: &[String]) -> Result<ScriptExecution> {
        let script_arg = script.to_string_lossy();
        if self.verbose {
            let mut shown: Vec<&str> = vec![&*script_arg];
            shown.extend(args.iter().map(String::as_str));
            ui::command(&self.python, &shown);
        }

        let mut child = Command::new(&self.python)
            .arg(script)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| error::process::interpreter_not_found(&self.python, &e))?;

        let relay = child
            .stderr
            .take()
            .map(|pipe| thread::spawn(move || tee_stderr(pipe)));

        let status = child.wait()?;

        let captured = match relay {
            Some(handle) => handle.join().map_err(|_| MydepsError::IoError {
                message: "stderr relay thread panicked".to_string(),
            })??,
            None => Vec::new(),
        };

        let stderr = String::from_utf8_lossy(&captured).into_owned();
        if status.success() {
            Ok(ScriptExecution {
                outcome: ExitOutcome::Success,
                stderr,
            })
        } else {
            Ok(ScriptExecution::failure(status.code(), stderr))
        }
    }
}

/// Copy the child's stderr to ours chunk by chunk, keeping a copy
fn tee_stderr(mut pipe: ChildStderr) -> io::Result<Vec<u8>> {
    let mut captured = Vec::new();
    let mut chunk = [0u8; 8192];
    let mut terminal = io::stderr();

    loop {
        let read = match pipe.read(&mut chunk) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        terminal.write_all(&chunk[..read])?;
        terminal.flush()?;
        captured.extend_from_slice(&chunk[..read]);
    }

    Ok(captured)
}
