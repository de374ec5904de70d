//! Command helper utilities

use crate::config::Settings;
use crate::error::{MydepsError, Result};
use crate::packages::Pip;
use crate::ui;

/// Build the pip-backed package manager for the resolved settings
pub fn package_manager(settings: &Settings) -> Pip {
    Pip::new(&settings.python).verbose(settings.verbose)
}

/// Report a missing manifest without failing the command
///
/// Any other error is passed through unchanged.
pub fn tolerate_missing_manifest<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(MydepsError::ManifestNotFound { path }) => {
            ui::error(format!(
                "Requirements file '{path}' not found. Please create it."
            ));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
