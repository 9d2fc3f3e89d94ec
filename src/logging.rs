//! Logger setup for the binaries.
//!
//! The interactive runner owns the terminal (raw mode, alternate screen), so
//! its log records go to a file. The headless runner logs to stderr.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Log file used when `RUST_LOG` is set but no explicit file was given.
pub const DEFAULT_LOG_FILE: &str = "tui-raycaster.log";

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level).format_timestamp_millis();
    // RUST_LOG directives refine the base level.
    builder.parse_default_env();
    builder
}

/// Logging for a process that draws on the terminal.
///
/// Without `log_file`, logging stays off unless `RUST_LOG` is set, in which
/// case records go to [`DEFAULT_LOG_FILE`].
pub fn init_for_terminal(log_file: Option<&Path>, level: LevelFilter) -> Result<()> {
    let path = match log_file {
        Some(path) => path,
        None if std::env::var_os("RUST_LOG").is_some() => Path::new(DEFAULT_LOG_FILE),
        None => return Ok(()),
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    builder(level)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

/// Logging to stderr, for headless runs.
pub fn init_stderr(level: LevelFilter) -> Result<()> {
    builder(level)
        .target(Target::Stderr)
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
