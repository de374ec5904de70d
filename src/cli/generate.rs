use clap::Parser;
use std::path::PathBuf;

/// Arguments for the generate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Snapshot the environment into my_requirements.txt:\n    mydeps generate\n\n\
                  Write to another file (overwrites it):\n    mydeps generate -f requirements.txt")]
pub struct GenerateArgs {
    /// Requirements file to overwrite (default: my_requirements.txt)
    #[arg(long, short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,
}
