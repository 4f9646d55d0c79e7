//! The `Logger` seam and the file-backed implementation.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fs2::FileExt;

use crate::clock::{SystemClock, WallClock};
use crate::error::{LogError, Result};
use crate::level::Level;
use crate::util::resolve_destination;

/// Leveled logging seam held by callers.
///
/// Implementations must make each successful call durable as exactly one
/// appended line before returning; previously written lines are never
/// overwritten or reordered.
pub trait Logger {
    /// Append one record at `level`.
    fn log(&self, level: Level, message: &str) -> Result<()>;

    fn debug(&self, message: &str) -> Result<()> {
        self.log(Level::Debug, message)
    }

    fn info(&self, message: &str) -> Result<()> {
        self.log(Level::Info, message)
    }

    fn warning(&self, message: &str) -> Result<()> {
        self.log(Level::Warning, message)
    }

    fn error(&self, message: &str) -> Result<()> {
        self.log(Level::Error, message)
    }
}

/// Logger appending to a single destination file.
///
/// The destination is resolved once at construction and immutable after.
/// Every call opens the file, takes an exclusive advisory lock, appends one
/// line, flushes, and releases the lock; writers in other threads or other
/// OS processes sharing the destination cannot interleave within a line.
/// No handle is kept between calls, so the logger never pins the file.
///
/// Message content is written verbatim; hosts scrub sensitive data before
/// calling.
pub struct FileLogger {
    destination: PathBuf,
    clock: Arc<dyn WallClock + Send + Sync>,
}

impl FileLogger {
    /// Logger bound to the default destination, `app.log` next to the
    /// running binary.
    pub fn new() -> Result<Self> {
        Self::from_parts(None)
    }

    /// Logger bound to `destination`. Relative paths resolve against the
    /// binary's directory, not the process working directory.
    pub fn with_destination(destination: impl AsRef<Path>) -> Result<Self> {
        Self::from_parts(Some(destination.as_ref()))
    }

    fn from_parts(dest: Option<&Path>) -> Result<Self> {
        let destination = resolve_destination(dest)?;
        Ok(Self {
            destination,
            clock: Arc::new(SystemClock::new()),
        })
    }

    /// Replace the timestamp source. Intended for tests that need
    /// deterministic timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn WallClock + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Resolved append target.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Verify the destination is reachable: create missing parents, open
    /// for append, take and release the exclusive lock. Writes nothing.
    pub fn check_destination(&self) -> Result<()> {
        let file = self.open_locked()?;
        let _ = FileExt::unlock(&file);
        Ok(())
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        let timestamp = self.clock.now().format("%Y-%m-%d %H:%M:%S");
        format!("[{timestamp}] [{level}]: {message}\n")
    }

    /// Open the destination for appending with the exclusive lock held.
    /// Blocks until the lock is granted; callers wanting a timeout layer it
    /// externally.
    fn open_locked(&self) -> std::result::Result<File, LogError> {
        if let Some(parent) = self.destination.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| LogError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.destination)
            .map_err(|source| LogError::Write {
                path: self.destination.clone(),
                source,
            })?;
        file.lock_exclusive().map_err(|source| LogError::Write {
            path: self.destination.clone(),
            source,
        })?;
        Ok(file)
    }

    fn append_line(&self, line: &str) -> std::result::Result<(), LogError> {
        let mut file = self.open_locked()?;
        let written = file
            .write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| LogError::Write {
                path: self.destination.clone(),
                source,
            });
        // Closing the handle also drops the lock; unlock first so the
        // release point is right after the flush.
        let _ = FileExt::unlock(&file);
        written
    }
}

impl Logger for FileLogger {
    fn log(&self, level: Level, message: &str) -> Result<()> {
        let line = self.format_line(level, message);
        if let Err(err) = self.append_line(&line) {
            // Mirror the failure on the diagnostic channel; the message
            // itself was not persisted and the caller gets the error.
            tracing::error!(
                error = %err,
                destination = %self.destination.display(),
                "log append failed"
            );
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::test_clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn pinned_logger(path: &Path) -> FileLogger {
        let origin = Local.with_ymd_and_hms(2031, 7, 14, 9, 5, 3).unwrap();
        FileLogger::with_destination(path)
            .unwrap()
            .with_clock(Arc::new(FixedClock::pinned_at(origin)))
    }

    #[test]
    fn line_format_matches_the_wire_shape() {
        let dir = std::env::temp_dir();
        let logger = pinned_logger(&dir.join("linelog-fmt-unit.log"));
        let line = logger.format_line(Level::Warning, "clock pinned");
        assert_eq!(line, "[2031-07-14 09:05:03] [WARNING]: clock pinned\n");
    }

    #[test]
    fn message_text_is_not_escaped() {
        let dir = std::env::temp_dir();
        let logger = pinned_logger(&dir.join("linelog-fmt-unit.log"));
        let line = logger.format_line(Level::Info, "odd ] chars [INFO]: kept");
        assert_eq!(
            line,
            "[2031-07-14 09:05:03] [INFO]: odd ] chars [INFO]: kept\n"
        );
    }
}
