//! Console Logger
//!
//! `log` backend for the frontend. Records go to `console.*` in the browser
//! and to stderr on native targets (tests, tooling).

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct ConsoleLogger {
    level: LevelFilter,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), &format_record(record));
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

/// Parse a level name ("error", "warn", "info", "debug", "trace", "off").
/// Unknown names fall back to `Info`.
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}

fn format_record(record: &Record) -> String {
    // "[todo_ui::cache] fetched 3 items"
    let target = record.target();
    if target.is_empty() {
        record.args().to_string()
    } else {
        format!("[{}] {}", target, record.args())
    }
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: &str) {
    eprintln!("{:<5} {}", level, line);
}
