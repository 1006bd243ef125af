//! Process configuration read from the environment.
//!
//! All settings are resolved once at startup into a [`Config`] value that is
//! passed into the logging and rendering collaborators; the analysis core
//! never reads the environment itself.

use std::path::PathBuf;

/// Where log records are routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogMode {
    #[default]
    Off,
    Console,
    File,
    Both,
}

impl LogMode {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "console" => LogMode::Console,
            "file" => LogMode::File,
            "both" => LogMode::Both,
            _ => LogMode::Off,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Pipe the rendered table through the external styling command.
    pub styled: bool,
    pub log_mode: LogMode,
    pub log_dir: PathBuf,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            styled: false,
            log_mode: LogMode::Off,
            log_dir: PathBuf::from("."),
            log_file: "most-changed.log".to_string(),
        }
    }
}

impl Config {
    /// Resolves configuration from `MOST_CHANGED_*` environment variables,
    /// falling back to defaults for anything unset or unrecognized.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Self {
            styled: std::env::var("MOST_CHANGED_STYLED")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.styled),
            log_mode: std::env::var("MOST_CHANGED_LOG")
                .map(|v| LogMode::parse(&v))
                .unwrap_or(defaults.log_mode),
            log_dir: std::env::var("MOST_CHANGED_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file: std::env::var("MOST_CHANGED_LOG_FILE").unwrap_or(defaults.log_file),
        }
    }

    /// Full path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }
}
