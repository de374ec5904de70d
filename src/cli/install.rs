use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install from my_requirements.txt:\n    mydeps install\n\n\
                   Install from another manifest:\n    mydeps install -f requirements.txt")]
pub struct InstallArgs {
    /// Requirements file (default: my_requirements.txt)
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,
}
