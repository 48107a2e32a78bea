//! Conversion between `HH:MM` clock strings and minutes-of-day.
//!
//! `chrono::NaiveTime` has no representation for `24:00`, so the end of the
//! day is special-cased on both sides.

use chrono::{NaiveTime, Timelike};

use crate::error::{MeetingError, Result};
use crate::range::MINUTES_PER_DAY;

const END_OF_DAY_CLOCK: &str = "24:00";

/// Parse an `HH:MM` string into a minute-of-day in `[0, 1440]`.
///
/// `"24:00"` is accepted and maps to 1440, the exclusive end of the day.
///
/// # Errors
/// Returns `MeetingError::InvalidClock` if the string is not a valid 24-hour
/// clock time.
pub fn parse_clock(s: &str) -> Result<u32> {
    let trimmed = s.trim();
    if trimmed == END_OF_DAY_CLOCK {
        return Ok(MINUTES_PER_DAY);
    }

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|e| MeetingError::InvalidClock(format!("'{}': {}", s, e)))?;

    Ok(time.hour() * 60 + time.minute())
}

/// Render a minute-of-day as `HH:MM`. Minute 1440 renders as `24:00`.
pub fn format_clock(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Minutes-of-day for a wall-clock hour and minute.
pub const fn time_in_minutes(hours: u32, minutes: u32) -> u32 {
    hours * 60 + minutes
}

