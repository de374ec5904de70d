//! Install modules on demand

use crate::error::{MydepsError, Result};
use crate::packages::{InstallationState, PackageManager};
use crate::ui;

/// Make every module in `modules` importable, installing the ones that are not.
///
/// Each installed module is checked again afterwards. Returns the modules
/// that had to be installed.
pub fn ensure_modules(packages: &dyn PackageManager, modules: &[String]) -> Result<Vec<String>> {
    let mut installed = Vec::new();

    for module in modules {
        if InstallationState::of(packages, module)?.is_present() {
            ui::success(format!("Module '{module}' is available."));
            continue;
        }

        ui::warning(format!("Module '{module}' not found. Installing..."));
        packages.install(module)?;

        if !InstallationState::of(packages, module)?.is_present() {
            return Err(MydepsError::ModuleUnresolvable {
                module: module.clone(),
            });
        }

        ui::success(format!("Module '{module}' installed successfully."));
        installed.push(module.clone());
    }

    Ok(installed)
}
