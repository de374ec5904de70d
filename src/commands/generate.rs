//! Generate command CLI wrapper

use crate::cli::GenerateArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::operations::generate_manifest;
use crate::ui::{ProgressReporter, SilentProgressReporter, SpinnerProgressReporter};

/// Run generate command
pub fn run(settings: &Settings, args: GenerateArgs) -> Result<()> {
    let path = settings.manifest_path(args.file.as_deref());
    let packages = helpers::package_manager(settings);

    // Verbose mode echoes the freeze command; a spinner would draw over it
    let mut progress: Box<dyn ProgressReporter> = if settings.verbose {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(SpinnerProgressReporter::new())
    };

    generate_manifest(&packages, &path, progress.as_mut())?;
    Ok(())
}
