//! Switch Use Case
//!
//! Activates one installed version of a program.
//!
//! A request moves through three states:
//!
//! - `SwitchRequest` - program and version may still be unknown
//! - `ResolvedSwitch` - both known, version verified to be installed
//! - `SwitchOutcome` - links updated (or a `TtError` on failure)
//!
//! Missing pieces are filled in through a `Chooser`.

mod result;
mod use_case;

pub use result::SwitchOutcome;
pub use use_case::{choose_program, choose_version, switch, ResolvedSwitch, SwitchRequest};
