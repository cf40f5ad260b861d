//! Validated identifiers used throughout the install pipeline

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder substituted with the release version in a URL template
pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Prefix reserved for transient staging directories in the install root
const RESERVED_PREFIX: &str = "tmp";

fn contains_separator(value: &str) -> bool {
    value.contains('/') || value.contains('\\')
}

/// Name of a tracked software package
///
/// Stored trimmed. Must be non-empty, must not contain a path separator,
/// and must not collide with the `tmp-` staging namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoftwareName(String);

impl SoftwareName {
    pub fn parse(raw: &str) -> Result<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(Error::validation("no software provided"));
        }
        if contains_separator(name) {
            return Err(Error::validation(format!(
                "invalid software name {:?}, must not contain a path separator",
                name
            )));
        }
        if name == RESERVED_PREFIX || name.starts_with("tmp-") {
            return Err(Error::validation(format!(
                "invalid software name {:?}, the 'tmp' prefix is reserved",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoftwareName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SoftwareName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Opaque release identifier
///
/// No semantic version parsing happens here; the value is only ever
/// substituted into URL templates and path names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(String);

impl Version {
    pub fn parse(raw: &str) -> Result<Self> {
        let version = raw.trim();
        if version.is_empty() {
            return Err(Error::validation("no version provided"));
        }
        if contains_separator(version) {
            return Err(Error::validation(format!(
                "invalid version {:?}, must not contain a path separator",
                version
            )));
        }
        Ok(Self(version.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Version {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Download URL with a `{version}` placeholder
///
/// Validated when added to the config. Templates read back from disk are
/// taken as-is so that a hand-edited config still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UrlTemplate(String);

impl UrlTemplate {
    pub fn parse(raw: &str) -> Result<Self> {
        let template = raw.trim();
        if template.is_empty() {
            return Err(Error::validation("no url provided"));
        }
        if !template.contains(VERSION_PLACEHOLDER) {
            return Err(Error::validation(format!(
                "invalid url {:?}, needs to contain a {} placeholder",
                template, VERSION_PLACEHOLDER
            )));
        }
        Ok(Self(template.to_string()))
    }

    /// Substitute the version into every placeholder occurrence
    pub fn render(&self, version: &Version) -> String {
        self.0.replace(VERSION_PLACEHOLDER, version.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
