//! PointerHealth - consistency of a program's binary and header links
//!
//! Both links are replaced one after the other, so an interrupted switch can
//! leave them on different versions. Readers check instead of assuming.

use serde::Serialize;

/// State of a program's current links as observed on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PointerHealth {
    /// Links agree (or there is nothing to agree on)
    Consistent,
    /// Binary link names a version that is not installed
    Dangling { target: String },
    /// Header link disagrees with the binary link
    HeaderMismatch {
        binary: Option<String>,
        headers: Option<String>,
    },
    /// A current link exists but could not be read
    Unreadable { link: LinkKind, error: String },
}

/// Which of a program's two current links is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Binary,
    Header,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Binary => "binary",
            LinkKind::Header => "header",
        }
    }
}

impl PointerHealth {
    pub fn is_consistent(&self) -> bool {
        matches!(self, PointerHealth::Consistent)
    }

    /// One-line description for warnings
    pub fn describe(&self) -> Option<String> {
        match self {
            PointerHealth::Consistent => None,
            PointerHealth::Dangling { target } => Some(format!(
                "current link points to {}, which is not installed",
                target
            )),
            PointerHealth::HeaderMismatch { binary, headers } => Some(format!(
                "binary link is on {} but header link is on {}",
                binary.as_deref().unwrap_or("nothing"),
                headers.as_deref().unwrap_or("nothing")
            )),
            PointerHealth::Unreadable { link, error } => Some(format!(
                "{} link cannot be read: {}",
                link.as_str(),
                error
            )),
        }
    }
}
