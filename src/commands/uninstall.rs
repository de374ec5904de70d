//! Uninstall command CLI wrapper
//!
//! Resolves the manifest path and delegates to operations/uninstall.rs.

use crate::cli::UninstallArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::operations::uninstall_from_manifest;
use crate::ui;

/// Run uninstall command
pub fn run(settings: &Settings, args: UninstallArgs) -> Result<()> {
    let path = settings.manifest_path(args.file.as_deref());
    let packages = helpers::package_manager(settings);

    if let Some(summary) =
        helpers::tolerate_missing_manifest(uninstall_from_manifest(&packages, &path))?
    {
        ui::success(format!(
            "Done: {} uninstalled, {} not installed.",
            summary.applied.len(),
            summary.skipped.len()
        ));
    }

    Ok(())
}
