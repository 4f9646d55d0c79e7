#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Leveled append-only file logging.
//!
//! This crate provides the logging sink shared by every host process:
//! callers hold a [`FileLogger`] (or any [`Logger`] trait object), invoke a
//! severity method, and the call returns once the formatted line is durable
//! in the destination file.
//!
//! ## Architecture
//!
//! - **Levels**: fixed `DEBUG`/`INFO`/`WARNING`/`ERROR` set (`level` module);
//!   no threshold filtering, every level is written
//! - **Formatting**: one line per record, `[timestamp] [LEVEL]: message`
//!   (`logger` module)
//! - **Locking**: per-call exclusive advisory lock on the destination, so
//!   writers in other threads or other processes never interleave a line
//! - **Resolution**: relative destinations anchor at the binary's own
//!   directory, never the caller's working directory (`util` module)
//!
//! There is no hidden global logger: hosts construct an instance and pass
//! it explicitly, sharing one behind `Arc<dyn Logger>` if they want to.

pub mod clock;
pub mod error;
pub mod level;
pub mod logger;
pub mod util;

pub use clock::{SystemClock, WallClock};
pub use error::{LogError, ParseLevelError, Report, Result};
pub use level::Level;
pub use logger::{FileLogger, Logger};
pub use util::{DEFAULT_LOG_FILE, default_base_dir, resolve_destination};
