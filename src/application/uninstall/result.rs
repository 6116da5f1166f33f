//! Uninstall result types

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::Program;

/// A version whose directories were deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedVersion {
    /// `None` for the development build
    pub version: Option<String>,
    pub paths: Vec<PathBuf>,
}

/// A path that could not be deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRemoval {
    pub version: Option<String>,
    pub path: PathBuf,
    pub error: String,
}

/// Result of an uninstall operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UninstallReport {
    pub program: Program,
    pub removed: Vec<RemovedVersion>,
    pub failed: Vec<FailedRemoval>,
    /// Version the current link named before it was removed
    pub active_cleared: Option<String>,
}

impl UninstallReport {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            removed: Vec::new(),
            failed: Vec::new(),
            active_cleared: None,
        }
    }

    /// Record deleted paths for `version`; an empty list records nothing
    pub fn add_removed(&mut self, version: Option<&str>, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        self.removed.push(RemovedVersion {
            version: version.map(str::to_string),
            paths,
        });
    }

    pub fn add_failed(&mut self, version: Option<&str>, path: PathBuf, error: String) {
        self.failed.push(FailedRemoval {
            version: version.map(str::to_string),
            path,
            error,
        });
    }

    /// Versions that were removed, in removal order
    pub fn removed_versions(&self) -> impl Iterator<Item = &str> {
        self.removed.iter().filter_map(|r| r.version.as_deref())
    }

    /// Check if every removal succeeded
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
