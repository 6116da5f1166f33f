//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Symlink links and namespace directory access
//! - `chooser/` - Terminal selection prompt

pub mod chooser;
pub mod fs;

pub use chooser::TerminalChooser;
pub use fs::SymlinkLink;
