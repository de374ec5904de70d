//! Snapshot the installed packages into a manifest

use std::path::Path;

use crate::error::{self, Result};
use crate::packages::PackageManager;
use crate::ui::{self, ProgressReporter};

/// Overwrite `path` with the installer's frozen package list.
///
/// The frozen output is written verbatim; any existing content is replaced,
/// never merged. Returns the number of non-empty lines written.
pub fn generate_manifest(
    packages: &dyn PackageManager,
    path: &Path,
    progress: &mut dyn ProgressReporter,
) -> Result<usize> {
    ui::info(format!(
        "Generating {} from installed packages...",
        path.display()
    ));

    progress.start("Collecting installed packages");
    let frozen = match packages.freeze() {
        Ok(frozen) => {
            progress.finish();
            frozen
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    std::fs::write(path, &frozen)
        .map_err(|e| error::manifest::write_failed(path.display().to_string(), e.to_string()))?;

    ui::success(format!("Requirements saved to {}", path.display()));

    Ok(frozen.lines().filter(|line| !line.trim().is_empty()).count())
}
