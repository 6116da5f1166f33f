//! Terminal chooser
//!
//! Arrow-key selection with `dialoguer`. Esc or `q` aborts the choice.

use std::io;

use dialoguer::theme::Theme;
use dialoguer::Select;

use crate::domain::ports::Chooser;
use crate::error::{TtError, TtResult};

/// Interactive chooser that prompts on the terminal
pub struct TerminalChooser {
    theme: Box<dyn Theme>,
}

impl TerminalChooser {
    pub fn with_theme(theme: Box<dyn Theme>) -> Self {
        Self { theme }
    }
}

impl Chooser for TerminalChooser {
    fn choose(
        &self,
        prompt: &str,
        candidates: &[String],
        default: Option<usize>,
    ) -> TtResult<String> {
        if candidates.is_empty() {
            return Err(TtError::SelectionAborted);
        }

        let selection = Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(candidates)
            .default(default.unwrap_or(0).min(candidates.len() - 1))
            .interact_opt()
            .map_err(|e| TtError::io("failed to read selection from", "stdin", io::Error::other(e)))?;

        match selection {
            Some(index) => Ok(candidates[index].clone()),
            None => Err(TtError::SelectionAborted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialoguer::theme::SimpleTheme;

    #[test]
    fn empty_candidate_list_aborts_without_prompting() {
        let chooser = TerminalChooser::with_theme(Box::new(SimpleTheme));
        assert!(matches!(
            chooser.choose("Select tcm version", &[], None),
            Err(TtError::SelectionAborted)
        ));
    }
}
