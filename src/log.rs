use std::fs::OpenOptions;
use std::str::FromStr;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::config::{LOG_FILE, LOG_LEVEL_VAR};
use crate::error::Result;

/// Level from `SNAKE_LOG`, `Info` when unset or unreadable.
pub fn level_from_env() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(LevelFilter::Info)
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(value.trim()).ok()
}

/// Logs to the terminal and appends the same lines to the log file.
pub fn init() -> Result<()> {
    let level = level_from_env();
    // create the file when missing, append to the end otherwise
    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;
    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, Config::default(), file),
    ];
    CombinedLogger::init(loggers)?;
    Ok(())
}
