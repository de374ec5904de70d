//! Uninstall every present manifest entry

use std::path::Path;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::operations::ManifestSummary;
use crate::packages::{InstallationState, PackageManager};
use crate::ui;

/// Uninstall the entries of the manifest at `path` that are importable.
///
/// The uninstaller always receives the bare name; version pins do not matter
/// for removal.
pub fn uninstall_from_manifest(
    packages: &dyn PackageManager,
    path: &Path,
) -> Result<ManifestSummary> {
    let manifest = Manifest::load(path)?;
    let mut summary = ManifestSummary::default();

    if manifest.is_empty() {
        ui::info(format!("No packages listed in {}.", path.display()));
        return Ok(summary);
    }
    ui::info(format!(
        "Checking {} package(s) from {}...",
        manifest.len(),
        path.display()
    ));

    for entry in manifest.entries() {
        let spec = &entry.specifier;

        match InstallationState::of(packages, spec.name())? {
            InstallationState::Present => {
                ui::warning(format!("Uninstalling {}...", spec.name()));
                packages.uninstall(spec.name())?;
                summary.applied.push(spec.clone());
            }
            InstallationState::Absent => {
                ui::success(format!("{} is not installed. Skipping...", spec.name()));
                summary.skipped.push(spec.clone());
            }
        }
    }

    Ok(summary)
}
