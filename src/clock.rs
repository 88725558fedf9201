//! Time sources for rollover decisions.

use std::sync::{Mutex, PoisonError};

use time::{Duration, OffsetDateTime, UtcOffset};

/// Supplies the current wall-clock time.
pub trait ClockSource: Send + Sync {
    /// Current time with the local UTC offset.
    fn now_local(&self) -> OffsetDateTime;

    /// Current time in UTC.
    fn now_utc(&self) -> OffsetDateTime {
        self.now_local().to_offset(UtcOffset::UTC)
    }
}

/// The operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_local(&self) -> OffsetDateTime {
        // The local offset is unavailable on some platforms once threads exist.
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock that only moves when told to.
///
/// The stored value keeps its offset, so `now_local` reports the wall-clock
/// time in whatever offset the clock was created with.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<OffsetDateTime>,
}

impl ManualClock {
    /// Create a clock frozen at `now`.
    pub fn new(now: OffsetDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Jump to `now`.
    pub fn set(&self, now: OffsetDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    /// Move forward (or backward, for a negative duration) by `by`.
    pub fn advance(&self, by: Duration) {
        let mut guard = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *guard += by;
    }
}

impl ClockSource for ManualClock {
    fn now_local(&self) -> OffsetDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
