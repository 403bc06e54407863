//! Wall-clock helpers and a monotonic millisecond clock.
//!
//! Record timestamps are plain epoch milliseconds. The monotonic clock
//! guarantees strictly increasing values even when several records are
//! stamped within the same millisecond, so insertion order stays
//! recoverable from `created_at` alone.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current wall-clock time as milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before Unix epoch")
        .as_millis() as i64
}

/// Hands out strictly increasing epoch-millisecond values.
///
/// Follows the wall clock while it advances; when several values are
/// requested within one millisecond, each subsequent value is bumped by
/// one past the last.
#[derive(Debug, Clone, Default)]
pub struct MonotonicClock {
    last: i64,
}

impl MonotonicClock {
    /// Creates a clock that has not yet issued a value.
    #[must_use]
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Returns the next timestamp, strictly greater than every value this
    /// clock has issued before.
    pub fn next_millis(&mut self) -> i64 {
        let now = now_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    /// The most recently issued value, or zero if none has been issued.
    #[must_use]
    pub fn last_millis(&self) -> i64 {
        self.last
    }
}
