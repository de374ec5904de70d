//! Configuration errors

use super::MydepsError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> MydepsError {
    MydepsError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> MydepsError {
    MydepsError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MydepsError {
    MydepsError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
