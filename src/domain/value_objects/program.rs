//! Program value object - the closed set of binaries tt manages

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TtError;

/// A program whose installed versions tt tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Program {
    /// Tarantool community edition
    Tarantool,
    /// Tarantool enterprise edition
    TarantoolEe,
    /// tt itself
    Tt,
    /// Tarantool cluster manager
    Tcm,
    /// Local development build of Tarantool (no versions)
    TarantoolDev,
}

impl Program {
    /// Programs with installed versions, in display order.
    ///
    /// This is the vocabulary of `binaries switch` and `binaries list`.
    pub const MANAGED: [Program; 4] = [
        Program::Tarantool,
        Program::TarantoolEe,
        Program::Tt,
        Program::Tcm,
    ];

    /// Every program `uninstall` accepts
    pub const ALL: [Program; 5] = [
        Program::Tarantool,
        Program::TarantoolEe,
        Program::Tt,
        Program::Tcm,
        Program::TarantoolDev,
    ];

    /// Parse a canonical name or alias (case-sensitive)
    pub fn parse(input: &str) -> Result<Self, TtError> {
        match input {
            "tarantool" | "tarantool-ce" => Ok(Program::Tarantool),
            "tarantool-ee" => Ok(Program::TarantoolEe),
            "tt" => Ok(Program::Tt),
            "tcm" => Ok(Program::Tcm),
            "tarantool-dev" => Ok(Program::TarantoolDev),
            _ => Err(TtError::UnrecognizedProgram {
                input: input.to_string(),
            }),
        }
    }

    /// Canonical name, also used as the on-disk namespace segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Program::Tarantool => "tarantool",
            Program::TarantoolEe => "tarantool-ee",
            Program::Tt => "tt",
            Program::Tcm => "tcm",
            Program::TarantoolDev => "tarantool-dev",
        }
    }

    /// Other names `parse` accepts for this program
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Program::Tarantool => &["tarantool-ce"],
            _ => &[],
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Program::Tarantool => "Tarantool community edition",
            Program::TarantoolEe => "Tarantool enterprise edition",
            Program::Tt => "Tarantool CLI",
            Program::Tcm => "Tarantool cluster manager",
            Program::TarantoolDev => "Tarantool development build",
        }
    }

    /// Whether installs of this program carry include headers
    pub fn ships_headers(&self) -> bool {
        match self {
            Program::Tarantool | Program::TarantoolEe | Program::TarantoolDev => true,
            Program::Tt | Program::Tcm => false,
        }
    }

    /// Whether this program has installed versions at all
    pub fn is_versioned(&self) -> bool {
        !matches!(self, Program::TarantoolDev)
    }
}

impl FromStr for Program {
    type Err = TtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::parse(s)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
