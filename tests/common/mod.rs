//! Common test utilities for tt CLI tests.
//!
//! - `TestEnv`: isolated bin/include directories plus helpers to run tt

pub mod env;

pub use env::*;
