//! File System Implementations
//!
//! Symlink-backed version links and namespace-level directory access.

mod namespace;
mod symlink;

pub use namespace::{
    entry_exists, is_real_dir, read_version_dirs, remove_dir_if_empty, remove_entry,
};
pub use symlink::SymlinkLink;
