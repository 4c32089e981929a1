//! Diagnostic logging to an append-only file.
//!
//! The library only emits `tracing` events; whoever drives it decides where
//! they go. The CLI installs [`file_subscriber`] globally, tests scope it with
//! `tracing::subscriber::with_default`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{LoggingError, LoggingResult};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "debug";

/// Build a subscriber appending plain-text events to `path`.
///
/// `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn file_subscriber(path: &Path) -> LoggingResult<impl tracing::Subscriber + Send + Sync> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::Open {
            path: path.display().to_string(),
            source: e,
        })?;

    Ok(tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .finish())
}

/// Install [`file_subscriber`] as the process-wide default.
pub fn init_file_logging(path: &Path) -> LoggingResult<()> {
    let subscriber = file_subscriber(path)?;
    tracing::subscriber::set_global_default(subscriber).map_err(|_| LoggingError::AlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_append_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vocab.log");
        std::fs::write(&path, "previous run\n").unwrap();

        let subscriber = file_subscriber(&path).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("vocabulary creation finished");
        });

        let log = std::fs::read_to_string(&path).unwrap();
        assert!(log.starts_with("previous run\n"));
        assert!(log.contains("vocabulary creation finished"));
    }

    #[test]
    fn unopenable_path_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("vocab.log");
        assert!(matches!(
            file_subscriber(&path),
            Err(LoggingError::Open { .. })
        ));
    }
}
