//! Version ordering
//!
//! Installed version names are opaque tokens: release tags (`2.10.4`,
//! `v2.0.0`, `3.0.0-beta1`) or source revisions (`master`, `a1b2c3d`).
//! Release tags sort by semantic version and come first; everything else
//! sorts lexically after them. Ties always fall back to the raw token so
//! distinct names never compare equal.

use std::cmp::Ordering;

use semver::Version;

/// Interpret a version token as a semantic version, if it looks like one.
///
/// Accepts a leading `v` and pads a bare `MAJOR.MINOR` to `MAJOR.MINOR.0`.
pub fn parse_release(token: &str) -> Option<Version> {
    let trimmed = token.strip_prefix('v').unwrap_or(token);
    if let Ok(version) = Version::parse(trimmed) {
        return Some(version);
    }

    let (major, minor) = trimmed.split_once('.')?;
    if major.is_empty() || minor.is_empty() || minor.contains('.') {
        return None;
    }
    let major = major.parse::<u64>().ok()?;
    let minor = minor.parse::<u64>().ok()?;
    Some(Version::new(major, minor, 0))
}

/// Total order over version tokens
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_release(a), parse_release(b)) {
        (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Sort version tokens in place, oldest release first
pub fn sort_versions<S: AsRef<str>>(versions: &mut [S]) {
    versions.sort_by(|a, b| compare_versions(a.as_ref(), b.as_ref()));
}
