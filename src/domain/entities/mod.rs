//! Domain Entities
//!
//! - `InstalledVersion` - a version directory of a program
//! - `PointerHealth` - observed consistency of a program's current links

mod installed_version;
mod pointer_health;

pub use installed_version::{active_version, InstalledVersion};
pub use pointer_health::{LinkKind, PointerHealth};
