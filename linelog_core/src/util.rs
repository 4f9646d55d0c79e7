//! Destination path resolution for the file sink.

use std::path::{Path, PathBuf};

use crate::error::LogError;

/// File name used when no destination is configured.
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Base directory for relative destinations: the directory holding the
/// running binary, so resolution does not depend on the process working
/// directory. Falls back to the working directory when the executable path
/// is unavailable.
#[must_use]
pub fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a caller-supplied destination to the concrete append target.
///
/// `None` selects [`DEFAULT_LOG_FILE`]. Empty paths are rejected; relative
/// paths are anchored at [`default_base_dir`]; absolute paths pass through.
pub fn resolve_destination(dest: Option<&Path>) -> Result<PathBuf, LogError> {
    let dest = dest.unwrap_or_else(|| Path::new(DEFAULT_LOG_FILE));
    if dest.as_os_str().is_empty() {
        return Err(LogError::InvalidDestination(
            "destination path is empty".to_string(),
        ));
    }
    if dest.is_absolute() {
        Ok(dest.to_path_buf())
    } else {
        Ok(default_base_dir().join(dest))
    }
}
