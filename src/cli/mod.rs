//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - generate: Generate command arguments
//! - run: Run command arguments
//! - ensure: Ensure command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod ensure;
pub mod generate;
pub mod install;
pub mod run;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use ensure::EnsureArgs;
pub use generate::GenerateArgs;
pub use install::InstallArgs;
pub use run::RunArgs;
pub use uninstall::UninstallArgs;

/// mydeps - Python dependency manager
///
/// Install, uninstall and generate requirements manifests, and run scripts that
/// install their missing modules on the fly.
#[derive(Parser, Debug)]
#[command(
    name = "mydeps",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage Python dependencies",
    long_about = "mydeps installs and uninstalls the packages listed in a requirements manifest, \
                  snapshots the environment into a manifest, and runs Python scripts while \
                  installing any module they fail to import.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mydeps install                       \x1b[90m# Install from my_requirements.txt\x1b[0m\n   \
                  mydeps install -f requirements.txt   \x1b[90m# Install from another manifest\x1b[0m\n   \
                  mydeps uninstall                     \x1b[90m# Remove manifest packages\x1b[0m\n   \
                  mydeps generate                      \x1b[90m# Freeze the environment\x1b[0m\n   \
                  mydeps run -s app.py                 \x1b[90m# Run, installing missing modules\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Python interpreter used for pip, import checks and scripts
    #[arg(long, global = true, value_name = "PATH", env = "MYDEPS_PYTHON")]
    pub python: Option<String>,

    /// Configuration file (defaults to ./mydeps.yaml when present)
    #[arg(long, global = true, value_name = "PATH", env = "MYDEPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the packages listed in a manifest
    Install(InstallArgs),

    /// Uninstall the packages listed in a manifest
    Uninstall(UninstallArgs),

    /// Write the installed packages to a manifest
    Generate(GenerateArgs),

    /// Run a script, installing modules it is missing
    Run(RunArgs),

    /// Install modules that cannot be imported
    Ensure(EnsureArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
