//! Quick Start Example
//!
//! Demonstrates constructing a file logger and appending records at each
//! severity level.

use linelog_core::{FileLogger, Logger};

/// Appends four records to `demo/app.log` next to the binary.
///
/// # Usage
///
/// Run via `cargo run --example quick_start`. Re-running appends; the file
/// is never truncated.
///
/// # Errors
///
/// Returns an error if the destination cannot be created or written,
/// surfaced as an `eyre::Report`.
fn main() -> Result<(), eyre::Report> {
    let logger = FileLogger::with_destination("demo/app.log")?;

    logger.debug("resolving configuration")?;
    logger.info("service starting")?;
    logger.warning("cache directory missing, rebuilding")?;
    logger.error("upstream unreachable, will retry")?;

    println!("wrote 4 records to {}", logger.destination().display());
    Ok(())
}
