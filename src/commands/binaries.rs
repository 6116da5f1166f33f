use anyhow::Result;

use tt::application::{list_binaries, SwitchRequest};
use tt::{Program, TtError};

use super::Session;
use crate::ui::json::emit_event;
use crate::ui::json::events::DataEvent;
use crate::ui::views::binaries::{render_listing, render_switch, ListingJson};

pub fn cmd_switch(session: &Session, program: Option<&str>, version: Option<String>) -> Result<()> {
    let program = program.map(managed_program).transpose()?;

    let chooser = session.chooser();
    let resolved = SwitchRequest::new(program, version).resolve(&session.layout, chooser.as_ref())?;
    log::info!("switching {} to {}", resolved.program(), resolved.version());
    let outcome = resolved.activate(&session.layout)?;

    let ui = &session.ui;
    if ui.json {
        emit_event(&DataEvent::new("switched", "switch", &outcome))?;
    } else {
        print!("{}", render_switch(&outcome, ui.color, ui.unicode));
    }
    Ok(())
}

/// Parse a program name `switch` accepts; the development build is not one
fn managed_program(input: &str) -> Result<Program, TtError> {
    let program = Program::parse(input)?;
    if Program::MANAGED.contains(&program) {
        Ok(program)
    } else {
        Err(TtError::UnrecognizedProgram {
            input: input.to_string(),
        })
    }
}

pub fn cmd_list(session: &Session) -> Result<()> {
    let listings = list_binaries(&session.layout);

    let ui = &session.ui;
    if ui.json {
        for listing in &listings {
            emit_event(&DataEvent::new("program", "list", ListingJson::from_listing(listing)))?;
        }
    } else {
        print!("{}", render_listing(&listings, ui.color, ui.unicode));
    }
    Ok(())
}
