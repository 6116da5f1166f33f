//! Uninstall use case

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::application::links::{ProgramLinks, StuckLink};
use crate::domain::entities::LinkKind;
use crate::domain::ports::VersionLink;
use crate::domain::value_objects::{is_version_name, sort_versions, Layout, Program, CURRENT_LINK};
use crate::error::{TtError, TtResult};
use crate::infrastructure::fs::{
    entry_exists, is_real_dir, read_version_dirs, remove_dir_if_empty, remove_entry,
};

use super::result::UninstallReport;

/// Remove `version` of `program`, or everything installed for it when
/// `version` is `None`.
///
/// Validation happens before anything is touched. Individual removal
/// failures are collected in the report rather than aborting the run.
pub fn uninstall_program(
    program: Program,
    version: Option<&str>,
    layout: &Layout,
) -> TtResult<UninstallReport> {
    let version = version.filter(|v| !v.is_empty());

    if !program.is_versioned() {
        if version.is_some() {
            return Err(TtError::UnversionedProgram {
                program: program.to_string(),
            });
        }
        return uninstall_dev(program, layout, &remove_entry);
    }

    let links = ProgramLinks::open(layout, program);
    match version {
        Some(version) => uninstall_version(&links, layout, version, &remove_entry),
        None => uninstall_all(&links, layout, &remove_entry),
    }
}

fn uninstall_version<L, F>(
    links: &ProgramLinks<L>,
    layout: &Layout,
    version: &str,
    remove: &F,
) -> TtResult<UninstallReport>
where
    L: VersionLink,
    F: Fn(&Path) -> TtResult<bool>,
{
    let program = links.program();
    if !is_version_name(version) || !is_real_dir(&layout.version_dir(program, version)) {
        return Err(TtError::VersionNotInstalled {
            program: program.to_string(),
            version: version.to_string(),
        });
    }

    let mut report = UninstallReport::new(program);
    let stuck = if links.binary_target()?.as_deref() == Some(version) {
        let stuck = links.clear();
        if !binary_stuck(&stuck) {
            log::warn!("{} {} was active; no version is current now", program, version);
            report.active_cleared = Some(version.to_string());
        }
        stuck
    } else if links.header_target()?.as_deref() == Some(version) {
        links.clear_headers().into_iter().collect()
    } else {
        Vec::new()
    };

    if !stuck.is_empty() {
        record_stuck(&mut report, stuck);
        log::warn!("keeping {} {}: a current link still points to it", program, version);
        return Ok(report);
    }

    remove_version(&mut report, layout, version, remove);
    remove_dir_if_empty(&layout.program_dir(program));
    remove_dir_if_empty(&layout.include_dir(program));
    Ok(report)
}

fn uninstall_all<L, F>(
    links: &ProgramLinks<L>,
    layout: &Layout,
    remove: &F,
) -> TtResult<UninstallReport>
where
    L: VersionLink,
    F: Fn(&Path) -> TtResult<bool>,
{
    let program = links.program();
    let bin_ns = layout.program_dir(program);
    let inc_ns = layout.include_dir(program);

    let mut versions: Vec<String> = read_version_dirs(&bin_ns)?
        .into_iter()
        .chain(read_version_dirs(&inc_ns)?)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    sort_versions(&mut versions);

    let has_links = entry_exists(&bin_ns.join(CURRENT_LINK)) || entry_exists(&inc_ns.join(CURRENT_LINK));
    if versions.is_empty() && !has_links {
        return Err(TtError::NoVersionsInstalled {
            program: program.to_string(),
        });
    }

    let mut report = UninstallReport::new(program);
    let previous = links.binary_target()?;
    let stuck = links.clear();
    if !binary_stuck(&stuck) {
        report.active_cleared = previous;
    }
    let Some(pinned) = record_stuck(&mut report, stuck) else {
        log::warn!("keeping every {} version: a current link could not be read", program);
        return Ok(report);
    };

    for version in &versions {
        if pinned.contains(version) {
            log::warn!("keeping {} {}: a current link still points to it", program, version);
            continue;
        }
        remove_version(&mut report, layout, version, remove);
    }

    remove_dir_if_empty(&bin_ns);
    remove_dir_if_empty(&inc_ns);
    log::info!(
        "removed {} of {} {} versions",
        report.removed.len(),
        versions.len(),
        program
    );
    Ok(report)
}

fn binary_stuck(stuck: &[StuckLink]) -> bool {
    stuck.iter().any(|link| link.kind == LinkKind::Binary)
}

/// Record links that could not be removed and return the versions they
/// still name. `None` if some stuck link has no readable target.
fn record_stuck(report: &mut UninstallReport, stuck: Vec<StuckLink>) -> Option<BTreeSet<String>> {
    let mut pinned = BTreeSet::new();
    let mut all_known = true;
    for link in stuck {
        report.add_failed(link.target.as_deref(), link.path, link.error.to_string());
        match link.target {
            Some(target) => {
                pinned.insert(target);
            }
            None => all_known = false,
        }
    }
    all_known.then_some(pinned)
}

fn uninstall_dev<F>(program: Program, layout: &Layout, remove: &F) -> TtResult<UninstallReport>
where
    F: Fn(&Path) -> TtResult<bool>,
{
    let artifacts = layout.dev_artifacts();
    if !artifacts.iter().any(|path| entry_exists(path)) {
        return Err(TtError::NoVersionsInstalled {
            program: program.to_string(),
        });
    }

    let mut report = UninstallReport::new(program);
    remove_paths(&mut report, None, &artifacts, remove);
    Ok(report)
}

/// Delete the binary and header directories of one version
fn remove_version<F>(report: &mut UninstallReport, layout: &Layout, version: &str, remove: &F)
where
    F: Fn(&Path) -> TtResult<bool>,
{
    let program = report.program;
    let paths = [
        layout.version_dir(program, version),
        layout.include_version_dir(program, version),
    ];
    remove_paths(report, Some(version), &paths, remove);
}

fn remove_paths<F>(
    report: &mut UninstallReport,
    version: Option<&str>,
    paths: &[PathBuf],
    remove: &F,
) where
    F: Fn(&Path) -> TtResult<bool>,
{
    let mut removed = Vec::new();
    for path in paths {
        match remove(path) {
            Ok(true) => removed.push(path.clone()),
            Ok(false) => {}
            Err(e) => {
                log::warn!("{}", e);
                report.add_failed(version, path.clone(), e.to_string());
            }
        }
    }
    report.add_removed(version, removed);
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::application::links::testing::MemoryLink;
    use crate::application::scan::list_installed_versions;
    use crate::application::switch::switch;
    use std::os::unix::fs::symlink;
    use tempfile::{tempdir, TempDir};

    fn layout_with(program: Program, versions: &[&str], headers: bool) -> (TempDir, Layout) {
        let dir = tempdir().unwrap();
        let layout = Layout::new(dir.path().join("bin"), dir.path().join("include"));
        for v in versions {
            std::fs::create_dir_all(layout.version_dir(program, v)).unwrap();
            if headers {
                std::fs::create_dir_all(layout.include_version_dir(program, v)).unwrap();
            }
        }
        (dir, layout)
    }

    fn listed(layout: &Layout, program: Program) -> Vec<(String, bool)> {
        list_installed_versions(layout.bin_dir(), program)
            .unwrap()
            .into_iter()
            .map(|v| (v.version, v.is_active))
            .collect()
    }

    #[test]
    fn removes_binary_and_header_directories() {
        let (_dir, layout) = layout_with(Program::Tarantool, &["2.10.4", "2.11.1"], true);

        let report = uninstall_program(Program::Tarantool, Some("2.10.4"), &layout).unwrap();

        assert!(report.is_success());
        assert_eq!(report.removed.len(), 1);
        assert_eq!(report.removed[0].paths.len(), 2);
        assert!(!layout.version_dir(Program::Tarantool, "2.10.4").exists());
        assert!(!layout.include_version_dir(Program::Tarantool, "2.10.4").exists());
        assert_eq!(listed(&layout, Program::Tarantool), vec![("2.11.1".to_string(), false)]);
    }

    #[test]
    fn removing_active_version_clears_links() {
        let (_dir, layout) = layout_with(Program::Tarantool, &["2.10.4", "2.11.1"], true);
        switch(Program::Tarantool, "2.11.1", &layout).unwrap();

        let report = uninstall_program(Program::Tarantool, Some("2.11.1"), &layout).unwrap();

        assert_eq!(report.active_cleared.as_deref(), Some("2.11.1"));
        assert!(listed(&layout, Program::Tarantool).iter().all(|(_, active)| !active));
        assert!(!entry_exists(&layout.program_dir(Program::Tarantool).join(CURRENT_LINK)));
        assert!(!entry_exists(&layout.include_dir(Program::Tarantool).join(CURRENT_LINK)));
    }

    #[test]
    fn removing_inactive_version_keeps_links() {
        let (_dir, layout) = layout_with(Program::Tt, &["2.0.0", "2.1.0"], false);
        switch(Program::Tt, "2.1.0", &layout).unwrap();

        let report = uninstall_program(Program::Tt, Some("2.0.0"), &layout).unwrap();

        assert_eq!(report.active_cleared, None);
        assert_eq!(listed(&layout, Program::Tt), vec![("2.1.0".to_string(), true)]);
    }

    #[test]
    fn unknown_version_is_rejected_before_any_change() {
        let (_dir, layout) = layout_with(Program::Tcm, &["1.0.0"], false);
        switch(Program::Tcm, "1.0.0", &layout).unwrap();

        let err = uninstall_program(Program::Tcm, Some("2.0.0"), &layout).unwrap_err();

        assert!(matches!(err, TtError::VersionNotInstalled { .. }));
        assert_eq!(listed(&layout, Program::Tcm), vec![("1.0.0".to_string(), true)]);
    }

    #[test]
    fn current_is_not_a_removable_version() {
        let (_dir, layout) = layout_with(Program::Tcm, &["1.0.0"], false);
        switch(Program::Tcm, "1.0.0", &layout).unwrap();

        assert!(matches!(
            uninstall_program(Program::Tcm, Some(CURRENT_LINK), &layout),
            Err(TtError::VersionNotInstalled { .. })
        ));
    }

    #[test]
    fn bulk_removal_leaves_empty_listing() {
        let (_dir, layout) =
            layout_with(Program::TarantoolEe, &["2.10.4", "2.11.1", "3.0.0"], true);
        switch(Program::TarantoolEe, "3.0.0", &layout).unwrap();

        let report = uninstall_program(Program::TarantoolEe, None, &layout).unwrap();

        assert!(report.is_success());
        assert_eq!(report.active_cleared.as_deref(), Some("3.0.0"));
        assert_eq!(
            report.removed_versions().collect::<Vec<_>>(),
            vec!["2.10.4", "2.11.1", "3.0.0"]
        );
        assert!(listed(&layout, Program::TarantoolEe).is_empty());
        assert!(!layout.program_dir(Program::TarantoolEe).exists());
        assert!(!layout.include_dir(Program::TarantoolEe).exists());
    }

    #[test]
    fn bulk_removal_includes_header_only_leftovers() {
        let (_dir, layout) = layout_with(Program::Tarantool, &["2.10.4"], false);
        std::fs::create_dir_all(layout.include_version_dir(Program::Tarantool, "1.10.0")).unwrap();

        let report = uninstall_program(Program::Tarantool, None, &layout).unwrap();

        assert_eq!(
            report.removed_versions().collect::<Vec<_>>(),
            vec!["1.10.0", "2.10.4"]
        );
    }

    #[test]
    fn bulk_removal_continues_past_failures() {
        let (_dir, layout) = layout_with(Program::Tt, &["2.0.0", "2.1.0", "2.2.0"], false);
        let links = ProgramLinks::open(&layout, Program::Tt);
        let broken = layout.version_dir(Program::Tt, "2.1.0");
        let remove = |path: &Path| {
            if path == broken.as_path() {
                Err(TtError::io(
                    "failed to remove",
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                ))
            } else {
                remove_entry(path)
            }
        };

        let report = uninstall_all(&links, &layout, &remove).unwrap();

        assert!(!report.is_success());
        assert_eq!(
            report.removed_versions().collect::<Vec<_>>(),
            vec!["2.0.0", "2.2.0"]
        );
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].version.as_deref(), Some("2.1.0"));
        assert_eq!(listed(&layout, Program::Tt), vec![("2.1.0".to_string(), false)]);
    }

    #[test]
    fn stuck_header_link_keeps_active_version() {
        let (_dir, layout) = layout_with(Program::Tarantool, &["2.10.4", "2.11.1"], true);
        let links = ProgramLinks::new(
            Program::Tarantool,
            MemoryLink::pointing_at(Some("2.11.1")),
            Some(MemoryLink::pointing_at(Some("2.11.1")).failing()),
        );

        let report = uninstall_version(&links, &layout, "2.11.1", &remove_entry).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.active_cleared.as_deref(), Some("2.11.1"));
        assert_eq!(links.binary_target().unwrap(), None);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].path, PathBuf::from("memory/current"));
        assert!(report.removed.is_empty());
        assert!(layout.version_dir(Program::Tarantool, "2.11.1").is_dir());
        assert!(layout.include_version_dir(Program::Tarantool, "2.11.1").is_dir());
    }

    #[test]
    fn bulk_removal_keeps_version_behind_stuck_link() {
        let (_dir, layout) = layout_with(Program::Tt, &["2.0.0", "2.1.0"], false);
        let links = ProgramLinks::new(
            Program::Tt,
            MemoryLink::pointing_at(Some("2.1.0")).failing(),
            None,
        );

        let report = uninstall_all(&links, &layout, &remove_entry).unwrap();

        assert!(!report.is_success());
        assert_eq!(report.active_cleared, None);
        assert_eq!(report.removed_versions().collect::<Vec<_>>(), vec!["2.0.0"]);
        assert_eq!(report.failed[0].version.as_deref(), Some("2.1.0"));
        assert!(layout.version_dir(Program::Tt, "2.1.0").is_dir());
    }

    #[test]
    fn bulk_removal_of_nothing_fails() {
        let (_dir, layout) = layout_with(Program::Tcm, &[], false);
        assert!(matches!(
            uninstall_program(Program::Tcm, None, &layout),
            Err(TtError::NoVersionsInstalled { .. })
        ));
    }

    #[test]
    fn bulk_removal_clears_dangling_link() {
        let (_dir, layout) = layout_with(Program::Tcm, &[], false);
        std::fs::create_dir_all(layout.program_dir(Program::Tcm)).unwrap();
        symlink("1.0.0", layout.program_dir(Program::Tcm).join(CURRENT_LINK)).unwrap();

        let report = uninstall_program(Program::Tcm, None, &layout).unwrap();

        assert_eq!(report.active_cleared.as_deref(), Some("1.0.0"));
        assert!(!layout.program_dir(Program::Tcm).exists());
    }

    #[test]
    fn empty_version_means_bulk() {
        let (_dir, layout) = layout_with(Program::Tt, &["2.0.0"], false);
        let report = uninstall_program(Program::Tt, Some(""), &layout).unwrap();
        assert_eq!(report.removed_versions().collect::<Vec<_>>(), vec!["2.0.0"]);
    }

    #[test]
    fn dev_build_is_removed_as_a_whole() {
        let (dir, layout) = layout_with(Program::Tarantool, &[], false);
        let build = dir.path().join("build");
        std::fs::create_dir_all(&build).unwrap();
        std::fs::create_dir_all(layout.bin_dir()).unwrap();
        std::fs::create_dir_all(layout.inc_dir().join("tarantool-dev")).unwrap();
        symlink(&build, layout.bin_dir().join("tarantool-dev")).unwrap();

        let report = uninstall_program(Program::TarantoolDev, None, &layout).unwrap();

        assert_eq!(report.removed.len(), 1);
        assert_eq!(report.removed[0].version, None);
        assert_eq!(report.removed[0].paths.len(), 2);
        assert!(build.exists());
        assert!(!entry_exists(&layout.bin_dir().join("tarantool-dev")));
    }

    #[test]
    fn dev_build_rejects_version() {
        let (_dir, layout) = layout_with(Program::Tarantool, &[], false);
        assert!(matches!(
            uninstall_program(Program::TarantoolDev, Some("1.0.0"), &layout),
            Err(TtError::UnversionedProgram { .. })
        ));
    }

    #[test]
    fn missing_dev_build_fails() {
        let (_dir, layout) = layout_with(Program::Tarantool, &[], false);
        assert!(matches!(
            uninstall_program(Program::TarantoolDev, None, &layout),
            Err(TtError::NoVersionsInstalled { .. })
        ));
    }
}
