//! Minutes-of-day intervals.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` within a single day,
//! measured in minutes from midnight. Ranges are validated on construction and
//! never mutated afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::{format_clock, parse_clock};
use crate::error::{MeetingError, Result};

/// The first minute of the day.
pub const START_OF_DAY: u32 = 0;

/// The last minute of the day. A range that should reach midnight is built
/// from this minute with `inclusive = true`.
pub const END_OF_DAY: u32 = 1439;

/// Number of minutes in a day; the exclusive end of [`TimeRange::WHOLE_DAY`].
pub const MINUTES_PER_DAY: u32 = 1440;

/// A half-open interval `[start, end)` of minutes within one day.
///
/// Ordering is by `start`, then by `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RangeInput")]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// The whole day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: MINUTES_PER_DAY,
    };

    /// Build a range from its bounds.
    ///
    /// With `inclusive = false` the range is `[start, end)`. With
    /// `inclusive = true` the minute `end` itself is part of the range, so
    /// `from_start_end(start, END_OF_DAY, true)` reaches minute 1440.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidInterval` if `start` is after the end or
    /// either bound lies outside `[0, 1440]`.
    pub fn from_start_end(start: u32, end: u32, inclusive: bool) -> Result<Self> {
        let end = if inclusive { end.saturating_add(1) } else { end };
        Self::checked(start, end)
    }

    /// Build `[start, start + duration)`.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidInterval` if the range runs past the end
    /// of the day.
    pub fn from_start_duration(start: u32, duration: u32) -> Result<Self> {
        Self::checked(start, start.saturating_add(duration))
    }

    fn checked(start: u32, end: u32) -> Result<Self> {
        if start > end || end > MINUTES_PER_DAY {
            return Err(MeetingError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end minute.
    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn duration(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True iff the two half-open intervals share at least one minute.
    ///
    /// Back-to-back ranges (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True iff the ranges overlap or touch end-to-start with no gap.
    pub fn is_mergeable_with(&self, other: &TimeRange) -> bool {
        self.overlaps(other) || self.end == other.start || other.end == self.start
    }

    /// True iff `minute` falls inside the range.
    pub fn contains(&self, minute: u32) -> bool {
        self.start <= minute && minute < self.end
    }

    /// True iff `other` lies entirely inside this range.
    pub fn contains_range(&self, other: &TimeRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// The smallest range covering both `self` and `other`.
    pub fn span(&self, other: &TimeRange) -> TimeRange {
        TimeRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

// ---------------------------------------------------------------------------
// Deserialization: bounds may be minute counts or "HH:MM" strings
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum ClockValue {
    Minutes(u32),
    Clock(String),
}

impl ClockValue {
    fn to_minutes(&self) -> Result<u32> {
        match self {
            ClockValue::Minutes(m) => Ok(*m),
            ClockValue::Clock(s) => parse_clock(s),
        }
    }
}

#[derive(Deserialize)]
struct RangeInput {
    start: ClockValue,
    end: ClockValue,
    #[serde(default)]
    inclusive: bool,
}

impl TryFrom<RangeInput> for TimeRange {
    type Error = MeetingError;

    fn try_from(input: RangeInput) -> Result<Self> {
        TimeRange::from_start_end(
            input.start.to_minutes()?,
            input.end.to_minutes()?,
            input.inclusive,
        )
    }
}
