//! Log subscriber setup.
//!
//! The terminal UI draws on stdout, so log lines go to a file or nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Build the filter from `RUST_LOG` if set, otherwise from the config string.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::builder()
        .parse(&config.filter)
        .map_err(|source| LoggingError::Filter {
            filter: config.filter.clone(),
            source,
        })
}

/// Install the global subscriber. Returns `false` when no log file is
/// configured and nothing was installed.
pub fn init(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    Ok(true)
}
