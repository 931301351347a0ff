//! One-second tick scheduling for clock-like widgets.
//!
//! Each periodic widget owns its own [`TickTimer`]. A tick only means "re-read the current
//! time"; it never touches windows, widgets, or the file tree.

use std::fmt;

use platform_host::{unix_time_ms_now, utc_time_of_day, MS_PER_SECOND};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimer {
    interval_ms: u64,
    next_due_ms: u64,
}

impl TickTimer {
    /// Starts a once-per-second timer whose first tick is due one interval after `now_ms`.
    pub fn every_second(now_ms: u64) -> Self {
        Self::with_interval(now_ms, MS_PER_SECOND)
    }

    pub fn with_interval(now_ms: u64, interval_ms: u64) -> Self {
        let interval_ms = interval_ms.max(1);
        Self {
            interval_ms,
            next_due_ms: now_ms.saturating_add(interval_ms),
        }
    }

    pub fn next_due_ms(&self) -> u64 {
        self.next_due_ms
    }

    /// Returns `true` when a tick is due at `now_ms` and schedules the next one.
    ///
    /// Ticks missed while the host was busy collapse into one.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        let missed = (now_ms - self.next_due_ms) / self.interval_ms;
        self.next_due_ms = self
            .next_due_ms
            .saturating_add((missed + 1).saturating_mul(self.interval_ms));
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockReading {
    pub fn at(unix_ms: u64) -> Self {
        let (hours, minutes, seconds) = utc_time_of_day(unix_ms);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn now() -> Self {
        Self::at(unix_time_ms_now())
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            hours,
            minutes,
            seconds,
        } = self;
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")
    }
}
