//! Run command CLI wrapper
//!
//! Wires the pip package manager, the Python executor and the
//! module-not-found classifier into a [`ScriptRunner`].

use crate::cli::RunArgs;
use crate::commands::helpers;
use crate::config::Settings;
use crate::error::Result;
use crate::runner::{ModuleNotFoundClassifier, PythonExecutor, RepairPolicy, ScriptRunner};
use crate::ui;

/// Run run command
pub fn run(settings: &Settings, args: RunArgs) -> Result<()> {
    let Some(script) = args.script else {
        ui::error("Please provide a script to run, e.g. mydeps run -s app.py");
        return Ok(());
    };

    let packages = helpers::package_manager(settings);
    let mut executor = PythonExecutor::new(&settings.python).verbose(settings.verbose);
    let policy = RepairPolicy::new(args.max_repairs.unwrap_or(settings.max_repairs));

    let report = ScriptRunner::new(&packages, &mut executor, &ModuleNotFoundClassifier)
        .with_policy(policy)
        .run(&script, &args.args)?;

    if !report.repaired.is_empty() {
        ui::success(format!(
            "Script completed after installing: {}",
            report.repaired.join(", ")
        ));
    }

    Ok(())
}
