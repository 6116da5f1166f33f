use tt::TtError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::terminal::detect_capabilities;

/// First tt error in the chain, if any
fn tt_error(err: &anyhow::Error) -> Option<&TtError> {
    err.chain().find_map(|cause| cause.downcast_ref::<TtError>())
}

/// Suggested next step for errors the user can act on
fn fix_for(err: &TtError) -> Option<String> {
    let fix = match err {
        TtError::UnrecognizedProgram { .. } => {
            "Supported programs: tarantool (tarantool-ce), tarantool-ee, tt, tcm".to_string()
        }
        TtError::VersionNotInstalled { .. } => {
            "Run `tt binaries list` to see installed versions".to_string()
        }
        TtError::NoVersionsInstalled { program } => {
            format!("Install one with `tt install {}`", program)
        }
        TtError::UnversionedProgram { program } => {
            format!("Run `tt uninstall {}` without a version", program)
        }
        TtError::SelectionAborted => {
            "Pass the program and version explicitly, e.g. `tt binaries switch tarantool 2.10.4`"
                .to_string()
        }
        TtError::PartialSwitch {
            program, version, ..
        } => format!("Run `tt binaries switch {} {}` again", program, version),
        TtError::InvalidConfig { .. } => {
            "Fix the configuration file or point --config at another one".to_string()
        }
        TtError::Io { .. } => return None,
    };
    Some(fix)
}

pub fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut block = ErrorBlock::new(err.to_string());
    for cause in err.chain().skip(1) {
        block = block.with_detail(format!("caused by: {}", cause));
    }
    if let Some(fix) = tt_error(err).and_then(fix_for) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

/// Report a failed command once, on stderr or as a JSON event
pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    let tt = tt_error(err);

    if json {
        let code = tt.map(TtError::kind).unwrap_or("error");
        let message = format!("{:#}", err);
        let event = ErrorEvent::new(command, code, message).with_help(tt.and_then(fix_for));
        if let Err(e) = emit_event(&event) {
            log::error!("failed to write error event: {}", e);
        }
        return;
    }

    let caps = detect_capabilities();
    eprint!(
        "{}",
        format_error_with(err, caps.supports_color, caps.supports_unicode)
    );
}
