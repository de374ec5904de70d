//! Subprocess errors

use std::process::ExitStatus;

use super::MydepsError;

/// Creates an interpreter launch error
pub fn interpreter_not_found(program: impl Into<String>, err: &std::io::Error) -> MydepsError {
    MydepsError::InterpreterNotFound {
        program: program.into(),
        reason: err.to_string(),
    }
}

/// Creates an installer failure from the installer's exit status
pub fn install_failed(specifier: impl Into<String>, status: ExitStatus) -> MydepsError {
    MydepsError::InstallerInvocationFailed {
        specifier: specifier.into(),
        reason: format!("installer exited with {status}"),
        code: status.code(),
    }
}

/// Creates an uninstaller failure from the uninstaller's exit status
pub fn uninstall_failed(name: impl Into<String>, status: ExitStatus) -> MydepsError {
    MydepsError::UninstallerInvocationFailed {
        name: name.into(),
        reason: format!("uninstaller exited with {status}"),
        code: status.code(),
    }
}

/// Creates a freeze failure
pub fn freeze_failed(reason: impl Into<String>) -> MydepsError {
    MydepsError::FreezeFailed {
        reason: reason.into(),
    }
}
