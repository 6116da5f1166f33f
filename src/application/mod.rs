//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `switch` - Resolves and activates a program version
//! - `list_binaries` - Groups installed versions by program
//! - `uninstall_program` - Removes one version, all versions, or the dev build

pub mod links;
pub mod list;
pub mod scan;
pub mod switch;
pub mod uninstall;

pub use links::{HeaderSwitch, LinkUpdate, ProgramLinks, StuckLink};
pub use list::{list_binaries, ProgramListing};
pub use scan::{list_installed_versions, pointer_health};
pub use switch::{
    choose_program, choose_version, switch, ResolvedSwitch, SwitchOutcome, SwitchRequest,
};
pub use uninstall::{uninstall_program, FailedRemoval, RemovedVersion, UninstallReport};
