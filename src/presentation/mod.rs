//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//!
//! Rendering lives with the binary in `ui/`.

pub mod cli;

pub use cli::{BinariesCommand, Cli, ColorWhen, Commands};
