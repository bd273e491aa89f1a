//! Console Logger
//!
//! A `log` backend for the browser. Records are timestamped with the local
//! wall clock and written through `console.log` / `console.warn` /
//! `console.error`, so DevTools level filtering keeps working. Off wasm the
//! same lines go to stderr.

use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_record(&timestamp, record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the logger. Fails if a logger is already set.
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

/// `[12:00:00.000] WARN todo_core::repository: message`
pub fn format_record(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {:<5} {}: {}", timestamp, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let line = format_record("09:30:00.125", Level::Warn, "todo_core", "slot _todos holds malformed data");
        assert_eq!(line, "[09:30:00.125] WARN  todo_core: slot _todos holds malformed data");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        let debug = Metadata::builder().level(Level::Debug).target("t").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_off_disables_everything() {
        let logger = ConsoleLogger::new(LevelFilter::Off);
        let error = Metadata::builder().level(Level::Error).target("t").build();
        assert!(!logger.enabled(&error));
    }

    #[test]
    fn test_init_logger_only_once() {
        assert!(init_logger(LevelFilter::Debug).is_ok());
        assert_eq!(log::max_level(), LevelFilter::Debug);
        assert!(init_logger(LevelFilter::Warn).is_err());
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
