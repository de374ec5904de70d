//! Package manager capability
//!
//! Every mutating operation on the Python environment goes through
//! [`PackageManager`]. The real implementation ([`Pip`]) shells out to
//! `<python> -m pip`; tests substitute an in-memory index.

pub mod pip;

use crate::error::Result;

pub use pip::Pip;

/// Narrow interface over the package installer and the import system
pub trait PackageManager {
    /// Install a specifier (`name` or `name==version`)
    fn install(&self, specifier: &str) -> Result<()>;

    /// Uninstall a package by bare name, without prompting
    fn uninstall(&self, name: &str) -> Result<()>;

    /// Exact-pinned list of every installed package, one per line
    fn freeze(&self) -> Result<String>;

    /// Whether `name` can currently be imported
    fn is_resolvable(&self, name: &str) -> Result<bool>;
}

/// Whether a package is importable right now
///
/// Computed on demand and never cached; it may go stale between the check
/// and the action that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationState {
    Present,
    Absent,
}

impl InstallationState {
    /// Query the current state of `name`
    pub fn of(packages: &dyn PackageManager, name: &str) -> Result<Self> {
        if packages.is_resolvable(name)? {
            Ok(Self::Present)
        } else {
            Ok(Self::Absent)
        }
    }

    pub fn is_present(self) -> bool {
        self == Self::Present
    }
}
