//! Logging setup
//!
//! Library code logs through the `log` facade; the binary installs a `fern`
//! dispatcher writing to stderr and, optionally, to a log file.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::Path;

/// Parse a configured level name. Unknown names fall back to `Warn`.
#[must_use]
pub fn level_from_str(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}

/// Build the dispatcher without installing it.
pub fn dispatch(level: LevelFilter, log_file: Option<&Path>) -> Result<fern::Dispatch> {
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    if let Some(path) = log_file {
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger. `verbose` forces debug output.
pub fn init(level: &str, verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { level_from_str(level) };

    dispatch(level, log_file)?
        .apply()
        .context("Failed to install logger")?;

    log::debug!("Logger initialized at level {}", level);
    Ok(())
}
