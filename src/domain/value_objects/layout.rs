//! Directory layout value object
//!
//! Derives every on-disk location from the two base directories:
//!
//! ```text
//! <bin_dir>/<program>/<version>/     installed version
//! <bin_dir>/<program>/current        active version link
//! <inc_dir>/<program>/<version>/     headers of that version
//! <inc_dir>/<program>/current        active headers link
//! <bin_dir>/tarantool-dev            development build
//! <inc_dir>/tarantool-dev            development build headers
//! ```

use std::path::{Path, PathBuf};

use super::program::Program;

/// Name of the link that marks the active version inside a namespace
pub const CURRENT_LINK: &str = "current";

/// Base directories for binaries and include headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    bin_dir: PathBuf,
    inc_dir: PathBuf,
}

impl Layout {
    pub fn new(bin_dir: impl Into<PathBuf>, inc_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            inc_dir: inc_dir.into(),
        }
    }

    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    pub fn inc_dir(&self) -> &Path {
        &self.inc_dir
    }

    /// `<bin_dir>/<program>`
    pub fn program_dir(&self, program: Program) -> PathBuf {
        program_namespace(&self.bin_dir, program)
    }

    /// `<bin_dir>/<program>/<version>`
    pub fn version_dir(&self, program: Program, version: &str) -> PathBuf {
        self.program_dir(program).join(version)
    }

    /// `<inc_dir>/<program>`
    pub fn include_dir(&self, program: Program) -> PathBuf {
        program_namespace(&self.inc_dir, program)
    }

    /// `<inc_dir>/<program>/<version>`
    pub fn include_version_dir(&self, program: Program, version: &str) -> PathBuf {
        self.include_dir(program).join(version)
    }

    /// Every on-disk artifact of the development build
    pub fn dev_artifacts(&self) -> [PathBuf; 2] {
        [
            program_namespace(&self.bin_dir, Program::TarantoolDev),
            program_namespace(&self.inc_dir, Program::TarantoolDev),
        ]
    }
}

/// `<base>/<program>`
pub fn program_namespace(base: &Path, program: Program) -> PathBuf {
    base.join(program.as_str())
}

/// Whether a namespace entry name can be an installed version
pub fn is_version_name(name: &str) -> bool {
    !name.is_empty()
        && name != CURRENT_LINK
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
}
