//! Domain Layer
//!
//! Pure types and rules of the binary registry, without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Program identity, directory layout, version ordering
//! - `entities/` - Installed versions and link health
//! - `ports/` - Interfaces for links and interactive choice

pub mod entities;
pub mod ports;
pub mod value_objects;
