//! Busy-interval merging and free-gap derivation for a single day.
//!
//! Collects the events that involve a set of attendees, merges overlapping or
//! back-to-back busy periods, then computes the gaps between merged periods
//! that are long enough to hold a meeting.

use std::collections::BTreeSet;

use tracing::trace;

use crate::meeting::Event;
use crate::range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};

/// Merge overlapping or adjacent ranges.
///
/// Returns a sorted list of non-empty ranges in which no two ranges overlap or
/// touch. Empty ranges occupy no time and are dropped. Merging an already
/// merged list returns it unchanged.
pub fn merge_ranges<I>(ranges: I) -> Vec<TimeRange>
where
    I: IntoIterator<Item = TimeRange>,
{
    let mut intervals: Vec<TimeRange> = ranges.into_iter().filter(|r| !r.is_empty()).collect();

    // Sort by start time (then by end time for stability).
    intervals.sort_unstable();

    let mut merged: Vec<TimeRange> = Vec::with_capacity(intervals.len());
    for range in intervals {
        if let Some(last) = merged.last_mut() {
            if last.is_mergeable_with(&range) {
                *last = last.span(&range);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Merged busy periods for everyone in `attendees`.
///
/// An event counts when any of its attendees is in `attendees`. No qualifying
/// events gives an empty list.
pub fn busy_intervals(events: &[Event], attendees: &BTreeSet<String>) -> Vec<TimeRange> {
    if attendees.is_empty() {
        return Vec::new();
    }

    let merged = merge_ranges(
        events
            .iter()
            .filter(|e| e.involves_any(attendees))
            .map(|e| e.when),
    );

    trace!(
        attendees = attendees.len(),
        busy = merged.len(),
        "merged busy intervals"
    );
    merged
}

/// Free gaps of at least `duration` minutes around the merged `busy` list.
///
/// `busy` must be sorted and merged, as returned by [`merge_ranges`]. Gaps
/// are never empty, so a zero `duration` still only yields real slots. The
/// gap after the last busy period runs through minute 1440.
pub fn free_gaps(busy: &[TimeRange], duration: u32) -> Vec<TimeRange> {
    if duration > MINUTES_PER_DAY {
        return Vec::new();
    }
    if busy.is_empty() {
        return vec![TimeRange::WHOLE_DAY];
    }

    let mut gaps = Vec::new();
    let mut cursor = START_OF_DAY;

    for range in busy {
        let width = range.start().saturating_sub(cursor);
        if width > 0 && width >= duration {
            // cursor < range.start() <= 1440, so the gap is always valid.
            if let Ok(gap) = TimeRange::from_start_end(cursor, range.start(), false) {
                gaps.push(gap);
            }
        }
        cursor = cursor.max(range.end());
    }

    // Trailing gap up to and including the last minute of the day.
    if cursor < MINUTES_PER_DAY && MINUTES_PER_DAY - cursor >= duration {
        if let Ok(gap) = TimeRange::from_start_end(cursor, END_OF_DAY, true) {
            gaps.push(gap);
        }
    }

    gaps
}

/// Free gaps of at least `duration` minutes for everyone in `attendees`.
pub fn find_free_slots(
    events: &[Event],
    attendees: &BTreeSet<String>,
    duration: u32,
) -> Vec<TimeRange> {
    free_gaps(&busy_intervals(events, attendees), duration)
}
