//! Symlink-backed version link
//!
//! `<namespace>/current -> <version>`, stored relative so the tree can be
//! moved. Replacement stages a uniquely named link next to `current` and
//! renames it over the old one, so readers see either the old or the new
//! target and never a missing link.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::VersionLink;
use crate::domain::value_objects::{Layout, Program, CURRENT_LINK};
use crate::error::{TtError, TtResult};

/// A `current` symlink inside one program namespace
#[derive(Debug, Clone)]
pub struct SymlinkLink {
    namespace: PathBuf,
    link: PathBuf,
}

impl SymlinkLink {
    pub fn new(namespace: impl Into<PathBuf>) -> Self {
        let namespace = namespace.into();
        let link = namespace.join(CURRENT_LINK);
        Self { namespace, link }
    }

    /// Link selecting the active binary of `program`
    pub fn binaries(layout: &Layout, program: Program) -> Self {
        Self::new(layout.program_dir(program))
    }

    /// Link selecting the active headers of `program`
    pub fn headers(layout: &Layout, program: Program) -> Self {
        Self::new(layout.include_dir(program))
    }
}

impl VersionLink for SymlinkLink {
    fn location(&self) -> &Path {
        &self.link
    }

    fn target(&self) -> TtResult<Option<String>> {
        match std::fs::read_link(&self.link) {
            Ok(target) => Ok(target
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TtError::io("failed to read link", &self.link, e)),
        }
    }

    fn set_target(&self, version: &str) -> TtResult<()> {
        let staged = tempfile::Builder::new()
            .prefix(".current.")
            .make_in(&self.namespace, |path| create_dir_link(Path::new(version), path))
            .map_err(|e| TtError::io("failed to stage link in", &self.namespace, e))?;

        staged
            .persist(&self.link)
            .map_err(|e| TtError::io("failed to replace link", &self.link, e.error))?;

        log::debug!("{} -> {}", self.link.display(), version);
        Ok(())
    }

    fn clear(&self) -> TtResult<()> {
        match remove_dir_link(&self.link) {
            Ok(()) => {
                log::debug!("removed {}", self.link.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TtError::io("failed to remove link", &self.link, e)),
        }
    }
}

#[cfg(unix)]
fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_dir_link(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(target, link)
}

#[cfg(unix)]
fn remove_dir_link(link: &Path) -> io::Result<()> {
    std::fs::remove_file(link)
}

#[cfg(windows)]
fn remove_dir_link(link: &Path) -> io::Result<()> {
    std::fs::remove_dir(link)
}
