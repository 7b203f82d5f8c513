//! Log setup.
//!
//! The interactive screen owns the terminal, so logs are only written when a
//! log file is configured. `RUST_LOG` takes precedence over `-v` flags.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;
use crate::config::Config;

/// Error installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        /// Requested log file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Filter for `verbosity`, unless `RUST_LOG` is set.
pub fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(LogLevel::from_verbosity(verbosity).as_directive()))
}

fn open(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the global subscriber if `config` names a log file.
///
/// Returns whether a subscriber was installed.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a subscriber is already
/// installed.
pub fn init(config: &Config) -> Result<bool, LoggingError> {
    let Some(path) = &config.log_file else {
        return Ok(false);
    };

    let file = open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter(config.verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(!init(&Config::default()).unwrap());
    }

    #[test]
    fn unopenable_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("missing").join("counter.log")),
            ..Config::default()
        };
        let err = init(&config).unwrap_err();
        assert!(matches!(err, LoggingError::Open { .. }));
        assert!(err.to_string().contains("counter.log"));
    }

    #[test]
    fn open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.log");
        open(&path).unwrap();
        assert!(path.exists());
    }
}
