//! mydeps - Python dependency manager
//!
//! Installs, uninstalls and generates requirements manifests, and runs Python
//! scripts while installing the modules they turn out to be missing.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod manifest;
mod operations;
mod packages;
mod runner;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};
use config::{ConfigFile, Settings};
use error::Result;

fn run(cli: Cli) -> Result<()> {
    let Cli {
        python,
        config,
        verbose,
        command,
    } = cli;

    // Version and completions work without a readable config file
    let settings = || -> Result<Settings> {
        let file = ConfigFile::discover(config.as_deref())?;
        Ok(Settings::resolve(python.clone(), file, verbose))
    };

    match command {
        Commands::Install(args) => commands::install::run(&settings()?, args),
        Commands::Uninstall(args) => commands::uninstall::run(&settings()?, args),
        Commands::Generate(args) => commands::generate::run(&settings()?, args),
        Commands::Run(args) => commands::run::run(&settings()?, args),
        Commands::Ensure(args) => commands::ensure::run(&settings()?, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
