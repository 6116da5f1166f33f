use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use tt::{uninstall_program, Program, UninstallReport};

use super::Session;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::views::uninstall::render_uninstall;

#[derive(Serialize)]
struct UninstallJson<'a> {
    #[serde(flatten)]
    report: &'a UninstallReport,
    success: bool,
}

/// Partial removals still print the report but exit with a failure status
pub fn cmd_uninstall(session: &Session, program: &str, version: Option<&str>) -> Result<ExitCode> {
    let program = Program::parse(program)?;
    let report = uninstall_program(program, version, &session.layout)?;

    let ui = &session.ui;
    if ui.json {
        emit_event(&DataEvent::new(
            "uninstalled",
            "uninstall",
            UninstallJson {
                report: &report,
                success: report.is_success(),
            },
        ))?;
    } else {
        print!("{}", render_uninstall(&report, ui.color, ui.unicode));
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        log::error!("{} path(s) could not be removed", report.failed.len());
        Ok(ExitCode::FAILURE)
    }
}
