//! Wall-clock helpers for host-driven periodic displays.

#[cfg(not(target_arch = "wasm32"))]
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds in one second.
pub const MS_PER_SECOND: u64 = 1_000;

/// Returns the current unix timestamp in milliseconds.
pub fn unix_time_ms_now() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now().max(0.0) as u64
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Splits a unix millisecond timestamp into UTC `(hours, minutes, seconds)` of the day.
pub fn utc_time_of_day(unix_ms: u64) -> (u8, u8, u8) {
    let seconds_of_day = (unix_ms / MS_PER_SECOND) % 86_400;
    (
        (seconds_of_day / 3_600) as u8,
        ((seconds_of_day % 3_600) / 60) as u8,
        (seconds_of_day % 60) as u8,
    )
}
