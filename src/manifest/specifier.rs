//! Dependency specifier parsing
//!
//! A specifier is either a bare `name` or an exact pin `name==version`.
//! Range operators are not supported.

use std::fmt;

/// Delimiter between name and version in an exact pin
pub const PIN_DELIMITER: &str = "==";

/// A single dependency from a requirements manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpecifier {
    name: String,
    raw: String,
}

impl DependencySpecifier {
    /// Parse a trimmed, non-comment manifest line.
    ///
    /// Returns a human-readable reason on failure; the caller attaches the
    /// line number.
    pub fn parse(input: &str) -> Result<Self, String> {
        let raw = input.trim();

        let name = match raw.split_once(PIN_DELIMITER) {
            Some((name, version)) => {
                validate_version(version)?;
                name
            }
            None => raw,
        };

        validate_name(name)?;

        Ok(Self {
            name: name.to_string(),
            raw: raw.to_string(),
        })
    }

    /// Bare package name, used for presence checks and uninstall
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full specifier passed to the installer, version pin included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Pinned version, if any
    pub fn version(&self) -> Option<&str> {
        self.raw
            .split_once(PIN_DELIMITER)
            .map(|(_, version)| version)
    }
}

impl fmt::Display for DependencySpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn validate_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Err("missing package name".to_string());
    };

    if !first.is_ascii_alphanumeric() {
        return Err(format!(
            "package name must start with a letter or digit, found '{first}'"
        ));
    }

    if let Some(bad) = chars.find(|c| !is_name_char(*c)) {
        return Err(unsupported_char(bad));
    }

    Ok(())
}

fn validate_version(version: &str) -> Result<(), String> {
    if version.is_empty() {
        return Err("missing version after '=='".to_string());
    }

    if let Some(bad) = version
        .chars()
        .find(|c| c.is_whitespace() || *c == '=')
    {
        return Err(format!("unexpected '{bad}' in version"));
    }

    Ok(())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}

fn unsupported_char(c: char) -> String {
    match c {
        '<' | '>' | '~' | '!' | '=' => "only exact '==' pins are supported".to_string(),
        c if c.is_whitespace() => "unexpected whitespace".to_string(),
        c => format!("unexpected '{c}' in package name"),
    }
}
