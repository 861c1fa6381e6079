#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "CHASER_LOG";

/// Install the client logger with a level taken from `CHASER_LOG`.
/// Defaults to `info` if the variable is unset or not a level name.
/// Calling it again is harmless; the first logger stays installed.
pub fn init_logging() {
    init_logging_with(level_from_env());
}

pub fn init_logging_with(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

fn level_from_env() -> LevelFilter {
    parse_level(env::var(LOG_ENV).ok().as_deref())
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_falls_back_to_info() {
        assert_eq!(parse_level(Some("chatty")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
    }
}
