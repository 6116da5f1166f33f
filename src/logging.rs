//! Diagnostic logging
//!
//! Log records go to stderr so stdout stays clean for results and NDJSON.

use std::str::FromStr;

use simplelog::{ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Environment variable that overrides the `-v` derived level
pub const LOG_ENV: &str = "TT_LOG";

/// Level for a `-v` count: warnings by default, then info, debug, trace
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbose: u8, color: bool) {
    let level = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| LevelFilter::from_str(value.trim()).ok())
        .unwrap_or_else(|| level_for(verbose));

    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .set_location_level(LevelFilter::Off)
        .add_filter_allow_str("tt")
        .build();

    let color_choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let term_logger = TermLogger::new(level, config, TerminalMode::Stderr, color_choice);
    if let Err(e) = CombinedLogger::init(vec![term_logger]) {
        // Only reachable if a logger was installed earlier in this process.
        log::debug!("logger already initialised: {}", e);
    }
}
