//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer and
//! mirrors each one to the browser console (stderr off wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append a formatted line, evicting the oldest when full
    fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Buffered lines, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.tail(self.capacity)
    }

    /// At most `limit` of the newest lines, oldest first
    pub fn tail(&self, limit: usize) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| {
                let skip = lines.len().saturating_sub(limit);
                lines.iter().skip(skip).cloned().collect()
            })
            .unwrap_or_default()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "[{} {} {}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = line.into();
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Newest `limit` lines held by the global logger, oldest first
pub fn recent_lines(limit: usize) -> Vec<String> {
    LOGGER.get().map(|logger| logger.tail(limit)).unwrap_or_default()
}
