//! Configuration handling for mydeps
//!
//! Settings come from three layers, highest precedence first:
//! 1. command-line flags and their environment variables (`MYDEPS_PYTHON`)
//! 2. the optional `mydeps.yaml` configuration file
//! 3. built-in defaults
//!
//! ```yaml
//! python: python3
//! manifest: requirements.txt
//! max_repairs: 5
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, Result};
use crate::manifest::DEFAULT_MANIFEST;
use crate::runner::DEFAULT_MAX_REPAIRS;

/// Configuration file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "mydeps.yaml";

/// Interpreter used when neither flag, environment nor config names one
pub fn default_python() -> &'static str {
    if cfg!(windows) { "python" } else { "python3" }
}

/// Contents of `mydeps.yaml`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Python interpreter for pip, import checks and scripts
    pub python: Option<String>,

    /// Manifest used when `--file` is not given
    pub manifest: Option<PathBuf>,

    /// Cap on repair installs during `run`
    pub max_repairs: Option<usize>,
}

impl ConfigFile {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Load a configuration file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => error::config::not_found(path.display().to_string()),
            _ => error::config::read_failed(path.display().to_string(), e.to_string()),
        })?;
        Self::from_yaml(&contents, path)
    }

    /// Load the named file, or the default file if it exists, or nothing
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Fully resolved settings shared by all commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub python: String,
    pub manifest: PathBuf,
    pub max_repairs: usize,
    pub verbose: bool,
}

impl Settings {
    /// Merge flag values over a config file over defaults
    pub fn resolve(python: Option<String>, config: ConfigFile, verbose: bool) -> Self {
        Self {
            python: python
                .or(config.python)
                .unwrap_or_else(|| default_python().to_string()),
            manifest: config
                .manifest
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST)),
            max_repairs: config.max_repairs.unwrap_or(DEFAULT_MAX_REPAIRS),
            verbose,
        }
    }

    /// Manifest path for a command, honoring its `--file` flag
    pub fn manifest_path(&self, file: Option<&Path>) -> PathBuf {
        file.map_or_else(|| self.manifest.clone(), Path::to_path_buf)
    }
}
