//! Uninstall Use Case
//!
//! Removes one version, every version, or the development build of a
//! program, retracting the current links before their target disappears.

mod result;
mod use_case;

pub use result::{FailedRemoval, RemovedVersion, UninstallReport};
pub use use_case::uninstall_program;
