//! Version command implementation
//!
//! Prints the version together with the defaults mydeps falls back to when
//! neither flags nor `mydeps.yaml` say otherwise.

use crate::config::{DEFAULT_CONFIG_FILE, default_python};
use crate::error::Result;
use crate::manifest::DEFAULT_MANIFEST;
use crate::runner::DEFAULT_MAX_REPAIRS;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", report());
    Ok(())
}

fn report() -> String {
    format!(
        "mydeps {}\n\nDefaults:\n  Interpreter: {}\n  Manifest: {}\n  Config file: {}\n  Max repairs: {}\n",
        env!("CARGO_PKG_VERSION"),
        default_python(),
        DEFAULT_MANIFEST,
        DEFAULT_CONFIG_FILE,
        DEFAULT_MAX_REPAIRS,
    )
}
