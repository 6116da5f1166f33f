//! tt - Tarantool binaries manager
//!
//! Keeps several versions of `tarantool`, `tarantool-ee`, `tt` and `tcm`
//! side by side, tracks which one is active through a `current` symlink
//! per program, and removes versions (or the local development build) on
//! request.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    list_binaries, list_installed_versions, switch, uninstall_program, ProgramListing,
    SwitchOutcome, UninstallReport,
};
pub use config::Config;
pub use domain::entities::InstalledVersion;
pub use domain::value_objects::{Layout, Program};
pub use error::{TtError, TtResult};
