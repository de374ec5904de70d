//! Operations module for manifest-driven package management
//!
//! This module provides the high-level operations behind the CLI commands:
//! - install_from_manifest: install every manifest entry that is missing
//! - uninstall_from_manifest: remove every manifest entry that is present
//! - generate_manifest: snapshot the environment into a manifest
//! - ensure_modules: install modules that cannot be imported
//!
//! Operations depend only on the [`PackageManager`](crate::packages::PackageManager)
//! capability, never on a concrete installer. Entries are processed in file
//! order, one at a time, and the first installer failure aborts the run.

pub mod ensure;
pub mod generate;
pub mod install;
pub mod uninstall;

pub use ensure::ensure_modules;
pub use generate::generate_manifest;
pub use install::install_from_manifest;
pub use uninstall::uninstall_from_manifest;

use crate::manifest::DependencySpecifier;

/// What a manifest operation did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Entries the installer or uninstaller was invoked for
    pub applied: Vec<DependencySpecifier>,
    /// Entries left alone because they were already in the desired state
    pub skipped: Vec<DependencySpecifier>,
}
