//! Timing helpers for the training loops

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Rate limiter for periodic reporting.
///
/// `fire` returns true at most once per interval; firing resets the
/// countdown.
#[derive(Debug)]
pub struct IntervalTimer {
    interval: Duration,
    last: Instant,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        IntervalTimer {
            interval,
            last: Instant::now(),
        }
    }

    pub fn fire(&mut self) -> bool {
        if self.last.elapsed() >= self.interval {
            self.last = Instant::now();
            true
        } else {
            false
        }
    }
}

/// Session name with a unix-seconds suffix, used to keep checkpoint files
/// from separate training runs apart.
pub fn session_name(prefix: &str) -> String {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("{prefix}-{seconds}")
}
