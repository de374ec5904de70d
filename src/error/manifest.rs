//! Manifest errors

use super::MydepsError;

/// Creates a manifest not found error
pub fn not_found(path: impl Into<String>) -> MydepsError {
    MydepsError::ManifestNotFound { path: path.into() }
}

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> MydepsError {
    MydepsError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> MydepsError {
    MydepsError::ManifestWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid specifier error for a 1-based manifest line
pub fn invalid_specifier(
    line: usize,
    specifier: impl Into<String>,
    reason: impl Into<String>,
) -> MydepsError {
    MydepsError::InvalidSpecifier {
        line,
        specifier: specifier.into(),
        reason: reason.into(),
    }
}
