//! Program namespace access
//!
//! Directory-level reads and removals shared by the scanner and the removal
//! engine. Symlinks are never followed: a version is a real directory.

use std::io;
use std::path::Path;

use crate::domain::value_objects::is_version_name;
use crate::error::{TtError, TtResult};

/// Names of the version directories directly under `namespace`, unsorted.
///
/// A missing namespace yields an empty list.
pub fn read_version_dirs(namespace: &Path) -> TtResult<Vec<String>> {
    let entries = match std::fs::read_dir(namespace) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(TtError::io("failed to read", namespace, e)),
    };

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TtError::io("failed to read", namespace, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| TtError::io("failed to inspect", entry.path(), e))?;
        if !file_type.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log::warn!("skipping non UTF-8 entry {}", entry.path().display());
            continue;
        };
        if is_version_name(&name) {
            versions.push(name);
        }
    }
    Ok(versions)
}

/// Whether `path` is a real directory (not a link to one)
pub fn is_real_dir(path: &Path) -> bool {
    std::fs::symlink_metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Whether anything (file, directory or link, even a broken one) is at `path`
pub fn entry_exists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

/// Remove whatever is at `path`. Returns `false` if nothing was there.
///
/// Directories are removed recursively; links are removed, not followed.
pub fn remove_entry(path: &Path) -> TtResult<bool> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(TtError::io("failed to inspect", path, e)),
    };

    let result = if meta.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        remove_link_or_file(path)
    };
    result.map_err(|e| TtError::io("failed to remove", path, e))?;

    log::debug!("removed {}", path.display());
    Ok(true)
}

/// Remove `dir` if it is empty; anything else is left alone.
pub fn remove_dir_if_empty(dir: &Path) {
    match std::fs::remove_dir(dir) {
        Ok(()) => log::debug!("removed empty {}", dir.display()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => log::debug!("kept {}: {}", dir.display(), e),
    }
}

#[cfg(unix)]
fn remove_link_or_file(path: &Path) -> io::Result<()> {
    std::fs::remove_file(path)
}

#[cfg(windows)]
fn remove_link_or_file(path: &Path) -> io::Result<()> {
    // Directory symlinks need remove_dir on Windows.
    std::fs::remove_file(path).or_else(|_| std::fs::remove_dir(path))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_version_dirs_missing_namespace_is_empty() {
        let dir = tempdir().unwrap();
        assert!(read_version_dirs(&dir.path().join("tcm")).unwrap().is_empty());
    }

    #[test]
    fn read_version_dirs_skips_files_links_and_reserved_names() {
        let dir = tempdir().unwrap();
        let ns = dir.path();
        std::fs::create_dir(ns.join("2.10.4")).unwrap();
        std::fs::create_dir(ns.join("master")).unwrap();
        std::fs::create_dir(ns.join(".hidden")).unwrap();
        std::fs::write(ns.join("README"), "x").unwrap();
        std::os::unix::fs::symlink("2.10.4", ns.join("current")).unwrap();
        std::os::unix::fs::symlink("2.10.4", ns.join("alias")).unwrap();

        let mut versions = read_version_dirs(ns).unwrap();
        versions.sort();
        assert_eq!(versions, vec!["2.10.4", "master"]);
    }

    #[test]
    fn remove_entry_removes_link_not_target() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("build");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("tarantool"), "bin").unwrap();
        let link = dir.path().join("tarantool-dev");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert!(remove_entry(&link).unwrap());
        assert!(!entry_exists(&link));
        assert!(target.join("tarantool").exists());
    }

    #[test]
    fn remove_entry_removes_directory_tree() {
        let dir = tempdir().unwrap();
        let version = dir.path().join("1.10.0");
        std::fs::create_dir_all(version.join("lib")).unwrap();
        std::fs::write(version.join("lib/x.so"), "x").unwrap();

        assert!(remove_entry(&version).unwrap());
        assert!(!version.exists());
        assert!(!remove_entry(&version).unwrap());
    }

    #[test]
    fn remove_dir_if_empty_keeps_non_empty() {
        let dir = tempdir().unwrap();
        let ns = dir.path().join("tt");
        std::fs::create_dir_all(ns.join("2.0.0")).unwrap();

        remove_dir_if_empty(&ns);
        assert!(ns.is_dir());

        std::fs::remove_dir(ns.join("2.0.0")).unwrap();
        remove_dir_if_empty(&ns);
        assert!(!ns.exists());
    }
}
