//! tt - Tarantool binaries manager
//!
//! Usage: tt <COMMAND>
//!
//! Commands:
//!   binaries switch  Activate an installed version
//!   binaries list    Show installed versions per program
//!   uninstall        Remove installed versions

use std::process::ExitCode;

use clap::Parser;

use tt::presentation::{Cli, ColorWhen};

mod commands;
mod logging;
mod ui;

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.color != Some(ColorWhen::Never));

    let command = commands::command_name(&cli.command);
    match commands::run(&cli) {
        Ok(status) => status,
        Err(err) => {
            log::debug!("{} failed: {:?}", command, err);
            ui::error::print_error(&err, command, cli.json);
            ExitCode::FAILURE
        }
    }
}
