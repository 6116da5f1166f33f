//! Switch use case

use std::path::Path;

use crate::application::links::ProgramLinks;
use crate::application::scan::list_installed_versions;
use crate::domain::ports::{Chooser, VersionLink};
use crate::domain::value_objects::{is_version_name, Layout, Program};
use crate::error::{TtError, TtResult};
use crate::infrastructure::fs::is_real_dir;

use super::result::SwitchOutcome;

/// A switch whose program and version may still be unknown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitchRequest {
    pub program: Option<Program>,
    pub version: Option<String>,
}

impl SwitchRequest {
    pub fn new(program: Option<Program>, version: Option<String>) -> Self {
        Self { program, version }
    }

    /// Fill in the missing program and version through `chooser`, then
    /// verify the version is installed.
    pub fn resolve(self, layout: &Layout, chooser: &dyn Chooser) -> TtResult<ResolvedSwitch> {
        let program = match self.program {
            Some(program) => program,
            None => {
                let candidates: Vec<String> =
                    Program::MANAGED.iter().map(|p| p.to_string()).collect();
                choose_program(&candidates, chooser)?
            }
        };

        let version = match self.version {
            Some(version) => version,
            None => choose_version(layout.bin_dir(), program, chooser)?,
        };

        ResolvedSwitch::validate(layout, program, version)
    }
}

/// A switch with a known program and an installed version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSwitch {
    program: Program,
    version: String,
}

impl ResolvedSwitch {
    /// Check that `version` of `program` is installed under the layout.
    ///
    /// Nothing on disk is modified.
    pub fn validate(layout: &Layout, program: Program, version: String) -> TtResult<Self> {
        if !program.is_versioned() {
            return Err(TtError::UnversionedProgram {
                program: program.to_string(),
            });
        }

        if !is_version_name(&version) || !is_real_dir(&layout.version_dir(program, &version)) {
            return Err(TtError::VersionNotInstalled {
                program: program.to_string(),
                version,
            });
        }

        Ok(Self { program, version })
    }

    pub fn program(&self) -> Program {
        self.program
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Point the program's symlinks at the resolved version
    pub fn activate(self, layout: &Layout) -> TtResult<SwitchOutcome> {
        let links = ProgramLinks::open(layout, self.program);
        self.activate_with(&links, layout)
    }

    /// Point `links` at the resolved version
    pub fn activate_with<L: VersionLink>(
        self,
        links: &ProgramLinks<L>,
        layout: &Layout,
    ) -> TtResult<SwitchOutcome> {
        let headers_installed =
            is_real_dir(&layout.include_version_dir(self.program, &self.version));
        let update = links.switch_to(&self.version, headers_installed)?;

        log::info!("switched {} to {}", self.program, self.version);
        Ok(SwitchOutcome {
            program: self.program,
            version: self.version,
            previous: update.previous,
            headers: update.headers,
        })
    }
}

/// Activate `version` of `program`
pub fn switch(program: Program, version: &str, layout: &Layout) -> TtResult<SwitchOutcome> {
    ResolvedSwitch::validate(layout, program, version.to_string())?.activate(layout)
}

/// Ask the user which program to work with
pub fn choose_program(candidates: &[String], chooser: &dyn Chooser) -> TtResult<Program> {
    let choice = chooser.choose("Select program", candidates, None)?;
    Program::parse(&choice)
}

/// Ask the user which installed version of `program` to use.
///
/// Fails with `NoVersionsInstalled` before prompting if there is nothing to
/// choose from. The cursor starts on the active version.
pub fn choose_version(bin_dir: &Path, program: Program, chooser: &dyn Chooser) -> TtResult<String> {
    let installed = list_installed_versions(bin_dir, program)?;
    if installed.is_empty() {
        return Err(TtError::NoVersionsInstalled {
            program: program.to_string(),
        });
    }

    let default = installed.iter().position(|v| v.is_active);
    let candidates: Vec<String> = installed.into_iter().map(|v| v.version).collect();
    chooser.choose(&format!("Select {} version", program), &candidates, default)
}
