//! InstalledVersion entity - one version directory of a program

use serde::Serialize;

/// A version directory found under a program namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledVersion {
    /// Directory name, the sole identity of the install
    pub version: String,
    /// Whether the program's current link targets this version
    pub is_active: bool,
}

impl InstalledVersion {
    pub fn new(version: impl Into<String>, is_active: bool) -> Self {
        Self {
            version: version.into(),
            is_active,
        }
    }
}

/// Name of the active version in a scanned list, if any
pub fn active_version(versions: &[InstalledVersion]) -> Option<&str> {
    versions
        .iter()
        .find(|v| v.is_active)
        .map(|v| v.version.as_str())
}
