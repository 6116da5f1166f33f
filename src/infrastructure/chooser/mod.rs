//! Chooser Implementations

mod terminal;

pub use terminal::TerminalChooser;
