//! VersionLink port - the rewritable reference to a program's active version
//!
//! A link either names one version of its namespace or is absent. Setting a
//! link replaces the old target in one step; clearing an absent link is fine.

use std::path::Path;

use crate::error::TtResult;

/// Read, replace and remove one current-version reference.
///
/// Implementations:
/// - `SymlinkLink` - a relative symlink named `current` inside the namespace
pub trait VersionLink {
    /// Where the link lives (used in messages)
    fn location(&self) -> &Path;

    /// Version the link names, or `None` if there is no link
    fn target(&self) -> TtResult<Option<String>>;

    /// Point the link at `version`, replacing any previous target
    fn set_target(&self, version: &str) -> TtResult<()>;

    /// Remove the link
    fn clear(&self) -> TtResult<()>;

    /// Restore a previously read target (`None` clears the link)
    fn restore(&self, previous: Option<&str>) -> TtResult<()> {
        match previous {
            Some(version) => self.set_target(version),
            None => self.clear(),
        }
    }
}
