//! Error types for tt
//!
//! Library errors use `thiserror`; the command layer wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tt operations
pub type TtResult<T> = Result<T, TtError>;

/// Main error type for registry and activation operations
#[derive(Error, Debug)]
pub enum TtError {
    /// Token does not name any known program
    #[error("not supported program: {input}")]
    UnrecognizedProgram { input: String },

    /// Named version has no directory under the program namespace
    #[error("{program} {version} is not installed")]
    VersionNotInstalled { program: String, version: String },

    /// Nothing to choose from or nothing to remove
    #[error("there are no {program} versions installed in this environment")]
    NoVersionsInstalled { program: String },

    /// A version was supplied for a program that has no version concept
    #[error("{program} has no versions; it can only be removed as a whole")]
    UnversionedProgram { program: String },

    /// The user declined the interactive choice
    #[error("selection aborted")]
    SelectionAborted,

    /// Binary link moved but the header link could not follow
    #[error(
        "switched {program} binary to {version} but failed to update headers: {source}{}",
        rollback_note(.rolled_back)
    )]
    PartialSwitch {
        program: String,
        version: String,
        rolled_back: bool,
        #[source]
        source: Box<TtError>,
    },

    /// Filesystem access failure
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },
}

fn rollback_note(rolled_back: &bool) -> &'static str {
    if *rolled_back {
        " (binary link restored)"
    } else {
        " (binary link could not be restored)"
    }
}

impl TtError {
    /// Wrap an I/O error with the path and action that produced it
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TtError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Stable, machine-readable name of the error kind (used in JSON output)
    pub fn kind(&self) -> &'static str {
        match self {
            TtError::UnrecognizedProgram { .. } => "unrecognized_program",
            TtError::VersionNotInstalled { .. } => "version_not_installed",
            TtError::NoVersionsInstalled { .. } => "no_versions_installed",
            TtError::UnversionedProgram { .. } => "unversioned_program",
            TtError::SelectionAborted => "selection_aborted",
            TtError::PartialSwitch { .. } => "partial_switch",
            TtError::Io { .. } => "io_error",
            TtError::InvalidConfig { .. } => "invalid_config",
        }
    }
}
