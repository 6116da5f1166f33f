//! Version directory scanner
//!
//! Reads a program namespace and reports its installed versions in
//! presentation order, marking the one the current link selects.

use std::path::Path;

use crate::domain::entities::{InstalledVersion, LinkKind, PointerHealth};
use crate::domain::ports::VersionLink;
use crate::domain::value_objects::{program_namespace, sort_versions, Layout, Program};
use crate::error::{TtError, TtResult};
use crate::infrastructure::fs::{is_real_dir, read_version_dirs};
use crate::infrastructure::SymlinkLink;

use super::links::ProgramLinks;

/// Installed versions of `program` under `bin_dir`, oldest release first.
///
/// A program without a namespace (nothing installed yet) yields an empty list.
pub fn list_installed_versions(bin_dir: &Path, program: Program) -> TtResult<Vec<InstalledVersion>> {
    if !program.is_versioned() {
        return Ok(Vec::new());
    }

    let namespace = program_namespace(bin_dir, program);
    let mut names = read_version_dirs(&namespace)?;
    sort_versions(&mut names);

    let active = match SymlinkLink::new(&namespace).target() {
        Ok(active) => active,
        Err(e) => {
            log::warn!("{}: cannot determine active version: {}", program, e);
            None
        }
    };

    Ok(names
        .into_iter()
        .map(|name| {
            let is_active = active.as_deref() == Some(name.as_str());
            InstalledVersion::new(name, is_active)
        })
        .collect())
}

/// Check that the current links of `program` agree with each other and
/// with what is installed. A link that exists but cannot be read is
/// reported as such, never taken for an absent one.
pub fn pointer_health(layout: &Layout, program: Program) -> PointerHealth {
    let links = ProgramLinks::open(layout, program);
    let binary = match links.binary_target() {
        Ok(binary) => binary,
        Err(e) => return unreadable(program, LinkKind::Binary, e),
    };

    if let Some(target) = &binary {
        if !is_real_dir(&layout.version_dir(program, target)) {
            return PointerHealth::Dangling {
                target: target.clone(),
            };
        }
    }

    if !program.ships_headers() {
        return PointerHealth::Consistent;
    }

    let headers = match links.header_target() {
        Ok(headers) => headers,
        Err(e) => return unreadable(program, LinkKind::Header, e),
    };
    let expected = binary
        .clone()
        .filter(|v| is_real_dir(&layout.include_version_dir(program, v)));
    if headers == expected {
        PointerHealth::Consistent
    } else {
        PointerHealth::HeaderMismatch { binary, headers }
    }
}

fn unreadable(program: Program, link: LinkKind, error: TtError) -> PointerHealth {
    log::warn!("{}: {} link: {}", program, link.as_str(), error);
    PointerHealth::Unreadable {
        link,
        error: error.to_string(),
    }
}
