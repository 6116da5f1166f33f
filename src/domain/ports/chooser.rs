//! Chooser Port
//!
//! Picks one entry out of an ordered candidate list. Implementations can be
//! interactive (a terminal prompt) or scripted (tests, non-interactive runs).

use crate::error::{TtError, TtResult};

/// Trait for choosing one candidate.
///
/// Implementations:
/// - `TerminalChooser`: arrow-key selection on the terminal
/// - `NonInteractiveChooser`: always aborts
pub trait Chooser {
    /// Return one element of `candidates`, or `TtError::SelectionAborted`.
    ///
    /// `default` is the index the cursor starts on.
    fn choose(&self, prompt: &str, candidates: &[String], default: Option<usize>)
        -> TtResult<String>;
}

/// Chooser for runs without a terminal: there is nobody to ask.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractiveChooser;

impl Chooser for NonInteractiveChooser {
    fn choose(
        &self,
        prompt: &str,
        _candidates: &[String],
        _default: Option<usize>,
    ) -> TtResult<String> {
        log::warn!("cannot prompt \"{}\" without a terminal", prompt);
        Err(TtError::SelectionAborted)
    }
}
