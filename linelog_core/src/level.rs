//! Record severity levels.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Severity of a single log record.
///
/// The sink writes every level unconditionally; there is no threshold
/// filtering. Hosts that want filtered console output apply it on their own
/// diagnostic channel before calling the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

impl Level {
    /// All levels, in ascending severity order.
    pub const ALL: [Self; 4] = [Self::Debug, Self::Info, Self::Warning, Self::Error];

    /// Upper-case name as rendered in the log line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive; accepts "warn" as a spelling of `Warning`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_upper_case() {
        assert_eq!(Level::Debug.as_str(), "DEBUG");
        assert_eq!(Level::Info.as_str(), "INFO");
        assert_eq!(Level::Warning.as_str(), "WARNING");
        assert_eq!(Level::Error.as_str(), "ERROR");
    }

    #[test]
    fn parse_round_trips_all_levels() {
        for level in Level::ALL {
            let parsed: Level = level.as_str().parse().unwrap();
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" info ".parse::<Level>().unwrap(), Level::Info);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "fatal".parse::<Level>().unwrap_err();
        assert!(err.to_string().contains("fatal"));
    }
}
