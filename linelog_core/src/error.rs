use std::path::PathBuf;

use thiserror::Error;

/// Typed failures surfaced by the logging sink.
#[derive(Debug, Error)]
pub enum LogError {
    /// Destination is empty or cannot be resolved to a concrete path.
    #[error("invalid log destination: {0}")]
    InvalidDestination(String),
    /// Parent directory of the destination could not be created.
    #[error("cannot create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Destination could not be opened, locked, or written.
    #[error("cannot append log line to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A level name that matched none of the known levels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log level {0:?} (expected debug|info|warning|error)")]
pub struct ParseLevelError(pub String);

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
