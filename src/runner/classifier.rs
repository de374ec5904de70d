//! Failure classification
//!
//! Decides from a failed run's diagnostic text whether the failure was
//! caused by an unresolved import, and which module was missing.

use std::sync::LazyLock;

use regex::Regex;

static MODULE_NOT_FOUND: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r#"No module named ['"]([^'"]+)['"]"#).expect("module-not-found pattern is valid")
});

/// Strategy for recognizing missing-module failures
pub trait FailureClassifier {
    /// Name of the missing module, if `diagnostic` reports one
    fn missing_module(&self, diagnostic: &str) -> Option<String>;
}

/// Matches Python's `No module named '<name>'` diagnostics
///
/// The first match wins; the module name is the quoted identifier inside it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ModuleNotFoundClassifier;

impl FailureClassifier for ModuleNotFoundClassifier {
    fn missing_module(&self, diagnostic: &str) -> Option<String> {
        MODULE_NOT_FOUND
            .captures(diagnostic)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
