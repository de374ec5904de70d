use clap::Parser;
use std::path::PathBuf;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Uninstall everything in my_requirements.txt:\n    mydeps uninstall\n\n\
                  Uninstall from another manifest:\n    mydeps uninstall --file requirements.txt")]
pub struct UninstallArgs {
    /// Requirements file (default: my_requirements.txt)
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,
}
