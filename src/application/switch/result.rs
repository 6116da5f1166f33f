//! Switch result types

use serde::Serialize;

use crate::application::links::HeaderSwitch;
use crate::domain::value_objects::Program;

/// Result of a successful switch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwitchOutcome {
    pub program: Program,
    /// Version that is now active
    pub version: String,
    /// Version that was active before, if any
    pub previous: Option<String>,
    pub headers: HeaderSwitch,
}

impl SwitchOutcome {
    /// The requested version was already active
    pub fn was_active(&self) -> bool {
        self.previous.as_deref() == Some(self.version.as_str())
    }
}
