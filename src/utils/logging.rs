//! Logger setup for a validated command.

use crate::utils::config::DEFAULT_LOG_FILTER;
use clap::ValueEnum;
use env_logger::{Env, Target};
use log::warn;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Verbosity accepted by `--log-level` and its shortcut flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Quiet,
    Error,
    Warning,
    Info,
    Debug,
    All,
}

impl LogLevel {
    /// `env_logger` filter string for this level
    pub fn filter(self) -> &'static str {
        match self {
            LogLevel::Quiet => "off",
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::All => "trace",
        }
    }
}

/// Logging options carried by an IBPI request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub path: Option<PathBuf>,
    pub level: Option<LogLevel>,
}

/// Initialize the global logger
///
/// **Public** - called once from main.rs, after the command line validated
///
/// `RUST_LOG` overrides the level. If the log file cannot be opened the
/// logger stays on stderr and says so.
pub fn init_logging(options: &LogOptions) {
    let filter = options.level.map_or(DEFAULT_LOG_FILTER, LogLevel::filter);
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(filter));

    let mut open_error = None;
    if let Some(path) = &options.path {
        match open_log_file(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(err) => open_error = Some((path, err)),
        }
    }

    builder.init();

    if let Some((path, err)) = open_error {
        warn!("Cannot open log file {}: {}, logging to stderr", path.display(), err);
    }
}

/// Open a log file for appending, creating it if needed
pub fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
