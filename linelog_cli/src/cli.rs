//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use linelog_core::Level;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

/// Default config location probed when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "etc/linelog.toml";

#[derive(Parser, Debug)]
#[command(
    name = "linelog",
    version,
    about = "Append leveled records to a shared log file"
)]
pub struct Cli {
    /// Path to config TOML
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Destination log file (overrides the config's logging.file)
    #[arg(long, value_name = "FILE")]
    pub dest: Option<PathBuf>,

    /// Print results and errors as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console diagnostic level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Record severity accepted on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LevelArg {
    Debug,
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for LevelArg {
    /// Lower-case value as typed on the command line, so clap can render
    /// and re-parse the default.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

impl From<LevelArg> for Level {
    fn from(a: LevelArg) -> Self {
        match a {
            LevelArg::Debug => Self::Debug,
            LevelArg::Info => Self::Info,
            LevelArg::Warning => Self::Warning,
            LevelArg::Error => Self::Error,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append one record to the log
    Write {
        /// Record severity
        #[arg(long, value_enum, default_value_t = LevelArg::Info)]
        level: LevelArg,

        /// Message text, written verbatim
        message: String,
    },
    /// Verify the destination can be created, opened, and locked
    SelfCheck,
}
