use chrono::{DateTime, Local};

/// Wall-clock abstraction for record timestamps.
///
/// - now(): returns the current local time
///
/// The sink renders timestamps at second precision; implementations may
/// return finer-grained values.
pub trait WallClock {
    fn now(&self) -> DateTime<Local>;
}

/// Default clock backed by the host's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl WallClock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[cfg(test)]
pub mod test_clock {
    use super::*;
    use chrono::Duration;

    /// Deterministic test clock pinned to a fixed instant.
    ///
    /// now() = the pinned instant + accumulated offset
    /// advance() shifts the reported time without sleeping.
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        origin: DateTime<Local>,
        offset: std::sync::Arc<std::sync::Mutex<Duration>>,
    }

    impl FixedClock {
        pub fn pinned_at(origin: DateTime<Local>) -> Self {
            Self {
                origin,
                offset: std::sync::Arc::new(std::sync::Mutex::new(Duration::zero())),
            }
        }

        /// Advance the clock by the given duration.
        pub fn advance(&self, d: Duration) {
            if let Ok(mut off) = self.offset.lock() {
                *off = *off + d;
            }
        }
    }

    impl WallClock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            let off = self.offset.lock().map(|g| *g).unwrap_or_else(|_| Duration::zero());
            self.origin + off
        }
    }
}
