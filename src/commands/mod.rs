//! Command handlers
//!
//! Each handler resolves its inputs, calls one use case and renders the
//! result as text or NDJSON.

mod binaries;
mod completions;
mod uninstall;

use std::process::ExitCode;

use anyhow::{Context, Result};

use tt::config::Config;
use tt::domain::ports::{Chooser, NonInteractiveChooser};
use tt::infrastructure::TerminalChooser;
use tt::presentation::{BinariesCommand, Cli, Commands};
use tt::Layout;

use crate::ui::context::UiContext;
use crate::ui::json::{emit_event, events::WarningEvent};
use crate::ui::theme::TtTheme;

/// Resolved configuration shared by all commands
pub struct Session {
    pub layout: Layout,
    pub ui: UiContext,
}

impl Session {
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine the working directory")?;
        let loaded = Config::discover(cli.config.as_deref(), &cwd)?;
        if let Some(source) = &loaded.source {
            log::info!("using config {}", source.display());
        }
        let config = loaded
            .config
            .with_env_overrides()
            .with_dir_overrides(cli.bin_dir.clone(), cli.inc_dir.clone());
        let ui = UiContext::new(cli.json, cli.color, &config);

        for warning in &loaded.warnings {
            let mut message = format!("unknown key '{}' in {}", warning.key, warning.file.display());
            if let Some(line) = warning.line {
                message.push_str(&format!(":{}", line));
            }
            if let Some(suggestion) = &warning.suggestion {
                message.push_str(&format!(" (did you mean '{}'?)", suggestion));
            }
            if ui.json {
                emit_event(&WarningEvent::new(command_name(&cli.command), message))?;
            } else {
                log::warn!("{}", message);
            }
        }

        let layout = config.layout();
        log::debug!(
            "bin_dir={} inc_dir={}",
            layout.bin_dir().display(),
            layout.inc_dir().display()
        );
        Ok(Self { layout, ui })
    }

    /// Terminal prompt when a human is attached, otherwise a chooser that aborts
    pub fn chooser(&self) -> Box<dyn Chooser> {
        if self.ui.interactive() {
            Box::new(TerminalChooser::with_theme(Box::new(TtTheme::new(
                self.ui.unicode,
            ))))
        } else {
            Box::new(NonInteractiveChooser)
        }
    }
}

/// Name used for the `command` field of JSON events
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Binaries(BinariesCommand::Switch { .. }) => "switch",
        Commands::Binaries(BinariesCommand::List) => "list",
        Commands::Uninstall { .. } => "uninstall",
        Commands::Completions { .. } => "completions",
    }
}

pub fn run(cli: &Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Completions { shell } => {
            completions::cmd_completions(*shell)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Binaries(BinariesCommand::Switch { program, version }) => {
            let session = Session::load(cli)?;
            binaries::cmd_switch(&session, program.as_deref(), version.clone())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Binaries(BinariesCommand::List) => {
            let session = Session::load(cli)?;
            binaries::cmd_list(&session)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Uninstall { program, version } => {
            let session = Session::load(cli)?;
            uninstall::cmd_uninstall(&session, program, version.as_deref())
        }
    }
}
