//! Ensure command CLI wrapper

use crate::cli::EnsureArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::operations::ensure_modules;

/// Run ensure command
pub fn run(settings: &Settings, args: EnsureArgs) -> Result<()> {
    let packages = helpers::package_manager(settings);
    ensure_modules(&packages, &args.modules)?;
    Ok(())
}
