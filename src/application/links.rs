//! Program links
//!
//! The binary link and, for programs that ship headers, the header link of
//! one program. Every update of the current version goes through here so
//! the two links only ever move together.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::LinkKind;
use crate::domain::ports::VersionLink;
use crate::domain::value_objects::{Layout, Program};
use crate::error::{TtError, TtResult};
use crate::infrastructure::SymlinkLink;

/// What happened to the header link during a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderSwitch {
    /// Header link now names the new version
    Switched,
    /// Program has no headers; nothing to do
    NotShipped,
    /// Program ships headers but this version has none installed; the header
    /// link was removed so it cannot name another version
    Missing,
}

/// Result of moving both links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkUpdate {
    /// Version the binary link named before the update
    pub previous: Option<String>,
    pub headers: HeaderSwitch,
}

/// A link that could not be removed
#[derive(Debug)]
pub struct StuckLink {
    pub kind: LinkKind,
    pub path: PathBuf,
    /// Version the link still names, if it could be read
    pub target: Option<String>,
    pub error: TtError,
}

/// Binary and header links of one program
#[derive(Debug, Clone)]
pub struct ProgramLinks<L: VersionLink> {
    program: Program,
    binary: L,
    headers: Option<L>,
}

impl ProgramLinks<SymlinkLink> {
    /// Symlink-backed links under the layout's base directories
    pub fn open(layout: &Layout, program: Program) -> Self {
        let headers = program
            .ships_headers()
            .then(|| SymlinkLink::headers(layout, program));
        Self::new(program, SymlinkLink::binaries(layout, program), headers)
    }
}

impl<L: VersionLink> ProgramLinks<L> {
    pub fn new(program: Program, binary: L, headers: Option<L>) -> Self {
        Self {
            program,
            binary,
            headers,
        }
    }

    pub fn program(&self) -> Program {
        self.program
    }

    /// Version named by the binary link
    pub fn binary_target(&self) -> TtResult<Option<String>> {
        self.binary.target()
    }

    /// Version named by the header link (`None` for programs without headers)
    pub fn header_target(&self) -> TtResult<Option<String>> {
        match &self.headers {
            Some(link) => link.target(),
            None => Ok(None),
        }
    }

    /// Point both links at `version`.
    ///
    /// `headers_installed` says whether `version` has a header directory.
    /// If the header link cannot be updated the binary link is restored to
    /// its previous target and `PartialSwitch` is returned.
    pub fn switch_to(&self, version: &str, headers_installed: bool) -> TtResult<LinkUpdate> {
        let previous = self.binary.target()?;
        self.binary.set_target(version)?;

        let Some(header_link) = &self.headers else {
            return Ok(LinkUpdate {
                previous,
                headers: HeaderSwitch::NotShipped,
            });
        };

        let header_result = if headers_installed {
            header_link
                .set_target(version)
                .map(|()| HeaderSwitch::Switched)
        } else {
            header_link.clear().map(|()| HeaderSwitch::Missing)
        };

        match header_result {
            Ok(headers) => Ok(LinkUpdate { previous, headers }),
            Err(source) => {
                log::warn!(
                    "header link {} not updated, restoring binary link",
                    header_link.location().display()
                );
                let rolled_back = match self.binary.restore(previous.as_deref()) {
                    Ok(()) => true,
                    Err(e) => {
                        log::error!("failed to restore {}: {}", self.binary.location().display(), e);
                        false
                    }
                };
                Err(TtError::PartialSwitch {
                    program: self.program.to_string(),
                    version: version.to_string(),
                    rolled_back,
                    source: Box::new(source),
                })
            }
        }
    }

    /// Remove both links. Both are attempted; every failure is returned.
    pub fn clear(&self) -> Vec<StuckLink> {
        let mut stuck = Vec::new();
        stuck.extend(clear_link(&self.binary, LinkKind::Binary));
        stuck.extend(self.clear_headers());
        stuck
    }

    /// Remove only the header link
    pub fn clear_headers(&self) -> Option<StuckLink> {
        self.headers
            .as_ref()
            .and_then(|link| clear_link(link, LinkKind::Header))
    }
}

fn clear_link<L: VersionLink>(link: &L, kind: LinkKind) -> Option<StuckLink> {
    let error = link.clear().err()?;
    log::error!("failed to remove {}: {}", link.location().display(), error);
    Some(StuckLink {
        kind,
        path: link.location().to_path_buf(),
        target: link.target().ok().flatten(),
        error,
    })
}
