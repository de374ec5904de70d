//! Install every missing manifest entry

use std::path::Path;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::operations::ManifestSummary;
use crate::packages::{InstallationState, PackageManager};
use crate::ui;

/// Install the entries of the manifest at `path` that are not importable.
///
/// Presence is checked with the bare name; the installer receives the full
/// specifier so version pins are honored. An installer failure aborts the
/// whole operation.
pub fn install_from_manifest(packages: &dyn PackageManager, path: &Path) -> Result<ManifestSummary> {
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
                ui::success(format!("{} is already installed. Skipping...", spec.name()));
                summary.skipped.push(spec.clone());
            }
            InstallationState::Absent => {
                match spec.version() {
                    Some(version) => ui::info(format!("Installing {} {version}...", spec.name())),
                    None => ui::info(format!("Installing {}...", spec.name())),
                }
                packages.install(spec.raw())?;
                summary.applied.push(spec.clone());
            }
        }
    }

    Ok(summary)
}
