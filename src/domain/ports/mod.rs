//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod chooser;
pub mod version_link;

pub use chooser::{Chooser, NonInteractiveChooser};
pub use version_link::VersionLink;
