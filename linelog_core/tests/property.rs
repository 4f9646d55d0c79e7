use std::fs;
use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use linelog_core::{FileLogger, Level, Logger, WallClock};
use proptest::prelude::*;
use tempfile::tempdir;

struct PinnedClock(DateTime<Local>);

impl WallClock for PinnedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

fn pinned_logger(path: &std::path::Path) -> FileLogger {
    let origin = Local.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
    FileLogger::with_destination(path)
        .unwrap()
        .with_clock(Arc::new(PinnedClock(origin)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Any single-line message is wrapped verbatim, nothing more.
    #[test]
    fn printable_messages_round_trip_verbatim(msg in "[ -~]{0,120}") {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prop.log");
        let logger = pinned_logger(&path);

        logger.log(Level::Info, &msg).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        prop_assert_eq!(content, format!("[2030-01-02 03:04:05] [INFO]: {}\n", msg));
    }

    // Line count tracks call count exactly, whatever the level mix.
    #[test]
    fn line_count_equals_call_count(picks in proptest::collection::vec(0usize..4, 1..24)) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prop.log");
        let logger = pinned_logger(&path);

        for &p in &picks {
            logger.log(Level::ALL[p], "steady payload").unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        prop_assert_eq!(content.lines().count(), picks.len());
        prop_assert!(content.ends_with('\n'));
    }
}
