//! Logging setup
//!
//! `env_logger` behind the `log` facade. The TUI owns the terminal, so in that
//! mode records go to a file instead of stderr.

use anyhow::{Context, Result};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Initialize the global logger
///
/// `level` is the default; `RUST_LOG` overrides it when set.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a logger is already
/// installed.
pub fn init_logging(level: LevelFilter, target: &LogTarget) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();

    if let LogTarget::File(path) = target {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.try_init().context("Logger already initialized")
}
