//! Error types and handling for mydeps
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`manifest`]: Manifest file and specifier errors
//! - [`process`]: Installer, interpreter and script errors
//! - [`config`]: Configuration errors

pub mod config;
pub mod manifest;
pub mod process;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mydeps operations
#[derive(Error, Diagnostic, Debug)]
pub enum MydepsError {
    // Manifest errors
    #[error("Requirements file '{path}' not found")]
    #[diagnostic(
        code(mydeps::manifest::not_found),
        help("Create the file, or generate one with 'mydeps generate'")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to read requirements file: {path}: {reason}")]
    #[diagnostic(code(mydeps::manifest::read_failed))]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to write requirements file: {path}: {reason}")]
    #[diagnostic(code(mydeps::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    #[error("Invalid specifier '{specifier}' on line {line}: {reason}")]
    #[diagnostic(
        code(mydeps::manifest::invalid_specifier),
        help("Specifiers must be 'name' or 'name==version'")
    )]
    InvalidSpecifier {
        line: usize,
        specifier: String,
        reason: String,
    },

    // Process errors
    #[error("Failed to launch '{program}': {reason}")]
    #[diagnostic(
        code(mydeps::process::interpreter_not_found),
        help("Point --python (or MYDEPS_PYTHON) at a working Python interpreter")
    )]
    InterpreterNotFound { program: String, reason: String },

    #[error("Failed to install '{specifier}': {reason}")]
    #[diagnostic(code(mydeps::process::install_failed))]
    InstallerInvocationFailed {
        specifier: String,
        reason: String,
        code: Option<i32>,
    },

    #[error("Failed to uninstall '{name}': {reason}")]
    #[diagnostic(code(mydeps::process::uninstall_failed))]
    UninstallerInvocationFailed {
        name: String,
        reason: String,
        code: Option<i32>,
    },

    #[error("Failed to list installed packages: {reason}")]
    #[diagnostic(code(mydeps::process::freeze_failed))]
    FreezeFailed { reason: String },

    #[error("Script '{script}' failed{}", exit_status(.code))]
    #[diagnostic(code(mydeps::run::script_failed))]
    ScriptFailed { script: String, code: Option<i32> },

    #[error("Giving up on missing module '{module}' after {repairs} repair(s)")]
    #[diagnostic(
        code(mydeps::run::repair_exhausted),
        help(
            "Install the package providing this module manually, or raise --max-repairs if the script needs more modules"
        )
    )]
    RepairExhausted { module: String, repairs: usize },

    #[error("Module '{module}' is still not importable after installation")]
    #[diagnostic(
        code(mydeps::ensure::unresolvable),
        help("The import name may differ from the package name on the package index")
    )]
    ModuleUnresolvable { module: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(mydeps::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(mydeps::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(mydeps::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(mydeps::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mydeps::fs::io_error))]
    IoError { message: String },
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => " (terminated by signal)".to_string(),
    }
}

impl MydepsError {
    /// Process exit code to report for this error
    ///
    /// Failing child processes pass their own exit code through; everything
    /// else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            MydepsError::ScriptFailed { code: Some(code), .. }
            | MydepsError::InstallerInvocationFailed { code: Some(code), .. }
            | MydepsError::UninstallerInvocationFailed { code: Some(code), .. } => *code,
            _ => 1,
        }
    }
}

impl From<std::io::Error> for MydepsError {
    fn from(err: std::io::Error) -> Self {
        MydepsError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MydepsError>;
