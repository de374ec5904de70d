//! UI/status presentation layer
//!
//! This module handles:
//! - Colorized status lines (success, info, warning, error)
//! - Echoing spawned commands in verbose mode
//! - Spinners for blocking operations without incremental output
//!
//! Output carries no contractual meaning; it is for humans only.

pub mod progress;

use console::Style;

pub use progress::{ProgressReporter, SilentProgressReporter, SpinnerProgressReporter};

/// Print a success line in green
pub fn success(message: impl AsRef<str>) {
    println!("{}", Style::new().green().apply_to(message.as_ref()));
}

/// Print an informational line in cyan
pub fn info(message: impl AsRef<str>) {
    println!("{}", Style::new().cyan().apply_to(message.as_ref()));
}

/// Print a warning line in yellow
pub fn warning(message: impl AsRef<str>) {
    println!("{}", Style::new().yellow().apply_to(message.as_ref()));
}

/// Print an error line in red on stderr
pub fn error(message: impl AsRef<str>) {
    eprintln!("{}", Style::new().red().apply_to(message.as_ref()));
}

/// Echo a command line about to be spawned (verbose mode)
pub fn command(program: &str, args: &[&str]) {
    let mut line = format!("$ {program}");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    eprintln!("{}", Style::new().dim().apply_to(line));
}
