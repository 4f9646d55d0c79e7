//! Human-readable error descriptions and structured JSON error formatting.

use linelog_core::LogError;

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(le) = err.downcast_ref::<LogError>() {
        return match le {
            LogError::InvalidDestination(detail) => format!(
                "What happened: The log destination is unusable ({detail}).\nLikely causes: An empty path passed via --dest or logging.file.\nHow to fix: Point --dest or the config's logging.file at a writable file path."
            ),
            LogError::CreateDir { path, .. } => format!(
                "What happened: The log directory {} could not be created.\nLikely causes: A path component exists as a regular file, or permissions forbid creating it.\nHow to fix: Remove the conflicting file or choose a destination the process may create.",
                path.display()
            ),
            LogError::Write { path, .. } => format!(
                "What happened: The record could not be appended to {}.\nLikely causes: Permission denied, disk full, or the path names a directory.\nHow to fix: Check permissions and free space, then rerun; the message was not persisted.",
                path.display()
            ),
        };
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {err}"
    )
}

/// Map typed log errors to stable exit codes; other errors return 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if let Some(le) = err.downcast_ref::<LogError>() {
        return match le {
            LogError::InvalidDestination(_) => 3,
            LogError::CreateDir { .. } => 4,
            LogError::Write { .. } => 5,
        };
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = match err.downcast_ref::<LogError>() {
        Some(LogError::InvalidDestination(_)) => "InvalidDestination",
        Some(LogError::CreateDir { .. }) => "CreateDir",
        Some(LogError::Write { .. }) => "WriteFailure",
        None => "Error",
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
