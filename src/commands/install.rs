//! Install command CLI wrapper
//!
//! Resolves the manifest path and delegates to operations/install.rs.

use crate::cli::InstallArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::operations::install_from_manifest;
use crate::ui;

/// Run install command
pub fn run(settings: &Settings, args: InstallArgs) -> Result<()> {
    let path = settings.manifest_path(args.file.as_deref());
    let packages = helpers::package_manager(settings);

    if let Some(summary) = helpers::tolerate_missing_manifest(install_from_manifest(&packages, &path))? {
        ui::success(format!(
            "Done: {} installed, {} already present.",
            summary.applied.len(),
            summary.skipped.len()
        ));
    }

    Ok(())
}
