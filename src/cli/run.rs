use clap::Parser;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Run a script, installing missing modules:\n    mydeps run -s app.py\n\n\
                  Pass arguments to the script:\n    mydeps run -s app.py -- --input data.csv\n\n\
                  Allow at most two repairs:\n    mydeps run -s app.py --max-repairs 2")]
pub struct RunArgs {
    /// Python script to run with auto-install
    #[arg(long, short = 's', value_name = "SCRIPT")]
    pub script: Option<PathBuf>,

    /// Maximum number of modules to install before giving up (default: 10)
    #[arg(long, value_name = "N")]
    pub max_repairs: Option<usize>,

    /// Arguments passed to the script
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}
