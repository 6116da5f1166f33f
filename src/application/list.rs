//! Listing engine
//!
//! Groups installed versions by program for `tt binaries list`.

use crate::domain::entities::{InstalledVersion, PointerHealth};
use crate::domain::value_objects::{Layout, Program};
use crate::error::TtResult;

use super::scan::{list_installed_versions, pointer_health};

/// Installed versions of one program
#[derive(Debug)]
pub struct ProgramListing {
    pub program: Program,
    /// Scan result; a failure here does not affect the other programs
    pub versions: TtResult<Vec<InstalledVersion>>,
    pub pointer: PointerHealth,
}

impl ProgramListing {
    pub fn is_empty(&self) -> bool {
        matches!(&self.versions, Ok(v) if v.is_empty())
    }
}

/// One listing per managed program, in display order, empty groups included
pub fn list_binaries(layout: &Layout) -> Vec<ProgramListing> {
    Program::MANAGED
        .iter()
        .map(|&program| {
            let versions = list_installed_versions(layout.bin_dir(), program);
            if let Err(e) = &versions {
                log::warn!("failed to list {}: {}", program, e);
            }
            let pointer = pointer_health(layout, program);
            if let Some(problem) = pointer.describe() {
                log::warn!("{}: {}", program, problem);
            }
            ProgramListing {
                program,
                versions,
                pointer,
            }
        })
        .collect()
}
