//! Tracing setup
//!
//! The terminal belongs to the form while it runs, so log output goes to a
//! file next to the settings instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseError;

/// Build the filter: `RUST_LOG` wins over the configured default.
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_filter))
}

/// Install the global subscriber, appending to the log file.
pub fn init_logging(paths: &ExpensePaths, settings: &Settings) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| ExpenseError::Io(format!("Failed to open log file: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| ExpenseError::Config(format!("Failed to initialise logging: {}", e)))?;

    tracing::info!(log_file = %paths.log_file().display(), "Logging initialised");
    Ok(())
}
