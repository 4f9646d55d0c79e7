#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for hosts embedding the linelog file sink.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - `[logging].file` selects the destination; the sink writes every level,
//!   so `[logging].level` only drives the host's console diagnostics.

use eyre::WrapErr;
use serde::Deserialize;

/// Accepted spellings for `logging.level`.
const LEVEL_NAMES: [&str; 5] = ["debug", "info", "warn", "warning", "error"];

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Logging {
    /// Path to the log file. Relative paths are resolved by the sink
    /// against its own base directory, not the process working directory.
    pub file: Option<String>,
    /// Console diagnostic level for the host ("debug", "info", ...).
    /// The file sink itself never filters.
    pub level: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    pub logging: Logging,
}

/// Parse a TOML string into a `Config` without validating it.
pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    /// Read `path`, parse it, and validate the result.
    pub fn load(path: &std::path::Path) -> eyre::Result<Self> {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let cfg = load_toml(&text)
            .wrap_err_with(|| format!("failed to parse config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> eyre::Result<()> {
        if let Some(file) = &self.logging.file {
            if file.trim().is_empty() {
                eyre::bail!("logging.file must not be empty");
            }
        }
        if let Some(level) = &self.logging.level {
            if !LEVEL_NAMES.contains(&level.to_ascii_lowercase().as_str()) {
                eyre::bail!(
                    "logging.level must be one of debug|info|warning|error, got {level:?}"
                );
            }
        }
        Ok(())
    }
}
