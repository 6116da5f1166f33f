//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod layout;
mod program;
mod version;

pub use layout::{is_version_name, program_namespace, Layout, CURRENT_LINK};
pub use program::Program;
pub use version::{compare_versions, parse_release, sort_versions};
