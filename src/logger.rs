//! Log routing per the resolved [`Config`](crate::config::Config).
//!
//! Installs a sink for the `log` facade that writes records to stderr, to a
//! file, to both, or discards them, as selected by `MOST_CHANGED_LOG`.

use crate::config::{Config, LogMode};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

struct RoutedLogger {
    mode: LogMode,
    file_path: PathBuf,
}

impl Log for RoutedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.mode != LogMode::Off && metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] {}", record.level(), record.args());

        if matches!(self.mode, LogMode::Console | LogMode::Both) {
            eprintln!("{line}");
        }

        if matches!(self.mode, LogMode::File | LogMode::Both) {
            // Append per record; volumes here are a handful of lines per run.
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(file, "{line}");
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the logger described by `config`. Harmless to call when logging
/// is off; records are then discarded.
pub fn init(config: &Config) -> Result<(), log::SetLoggerError> {
    let logger = RoutedLogger {
        mode: config.log_mode,
        file_path: config.log_path(),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(match config.log_mode {
        LogMode::Off => LevelFilter::Off,
        _ => LevelFilter::Debug,
    });
    Ok(())
}
