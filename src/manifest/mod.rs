//! Requirements manifest handling
//!
//! A manifest is a plain UTF-8 text file with one specifier per line.
//! Blank lines and lines starting with `#` are ignored; there are no inline
//! comments.

pub mod specifier;

use std::path::Path;

use crate::error::{self, Result};

pub use specifier::DependencySpecifier;

/// Default manifest file name
pub const DEFAULT_MANIFEST: &str = "my_requirements.txt";

/// One parsed manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 1-based line number in the manifest file
    pub line: usize,
    pub specifier: DependencySpecifier,
}

/// A parsed requirements manifest, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Load and parse a manifest file.
    ///
    /// The whole file is parsed before anything is returned, so a malformed
    /// line is reported before any entry is acted upon.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => error::manifest::not_found(path.display().to_string()),
            _ => error::manifest::read_failed(path.display().to_string(), e.to_string()),
        })?;

        Self::parse(&contents)
    }

    /// Parse manifest contents
    pub fn parse(contents: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if is_ignored(trimmed) {
                continue;
            }

            let specifier = DependencySpecifier::parse(trimmed)
                .map_err(|reason| error::manifest::invalid_specifier(index + 1, trimmed, reason))?;

            entries.push(ManifestEntry {
                line: index + 1,
                specifier,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn is_ignored(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}
