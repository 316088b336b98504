use chrono::Local;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger with per-topic filtering for debug output.
// Topics in use: "game" (state machine), "ball" (collision pass).
#[derive(Debug)]
struct GameLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl log::Log for GameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Check if the record's level is enabled
        if metadata.level() <= self.level {
            // With filters set, debug/trace records must match a topic
            if let Some(filters) = &self.debug_filters {
                if metadata.level() == log::Level::Debug || metadata.level() == log::Level::Trace {
                    return filters.contains(metadata.target())
                        || filters.iter().any(|f| metadata.target().starts_with(f));
                }
            }
            return true;
        }
        false
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let level_color = match record.level() {
                log::Level::Error => "\x1B[31m", // Red
                log::Level::Warn => "\x1B[33m",  // Yellow
                log::Level::Info => "\x1B[32m",  // Green
                log::Level::Debug => "\x1B[36m", // Cyan
                log::Level::Trace => "\x1B[35m", // Magenta
            };

            let reset = "\x1B[0m";
            let timestamp = Local::now().format("%H:%M:%S%.3f");

            let mut stdout = io::stdout();
            writeln!(
                stdout,
                "{timestamp} {level_color}{level:5}{reset} {target}: {message}",
                timestamp = timestamp,
                level_color = level_color,
                level = record.level(),
                reset = reset,
                target = record.target(),
                message = record.args()
            )
            .expect("Failed to write to stdout");
            stdout.flush().expect("Failed to flush stdout");
        }
    }

    fn flush(&self) {
        io::stdout().flush().expect("Failed to flush stdout");
    }
}

static LOGGER: OnceLock<GameLogger> = OnceLock::new();

// Initialize the logger with optional comma-separated debug topics
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), SetLoggerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect::<HashSet<String>>()
    });

    if LOGGER.get().is_none() {
        let logger = GameLogger {
            level,
            debug_filters,
        };
        LOGGER.set(logger).expect("Failed to set logger");
    }

    log::set_logger(LOGGER.get().unwrap()).map(|()| log::set_max_level(level))
}

// Topic macros for the two debug-logged subsystems
#[macro_export]
macro_rules! debug_game {
    ($($arg:tt)*) => {
        log::debug!(target: "game", $($arg)*)
    }
}

#[macro_export]
macro_rules! debug_ball {
    ($($arg:tt)*) => {
        log::debug!(target: "ball", $($arg)*)
    }
}
