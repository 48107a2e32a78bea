//! Meeting slot search with best-effort optional attendees.
//!
//! Required attendees always constrain the result. Optional attendees are
//! honored only when at least one slot works for everyone; otherwise they are
//! dropped and the required-only slots are returned.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::freebusy::find_free_slots;
use crate::meeting::{Event, MeetingRequest};
use crate::range::{TimeRange, MINUTES_PER_DAY};

/// Which attendees the returned slots work for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    /// Every required and optional attendee is free.
    Everyone,
    /// Optional attendees could not be fit; required attendees are free.
    RequiredOnly,
    /// No slot exists.
    Unschedulable,
}

/// Slots found for a request, tagged with the attendees they satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    pub attendance: Attendance,
    /// Chronological, non-overlapping, each at least the requested duration.
    pub slots: Vec<TimeRange>,
}

impl QueryOutcome {
    fn unschedulable() -> Self {
        Self {
            attendance: Attendance::Unschedulable,
            slots: Vec::new(),
        }
    }

    fn tagged(attendance: Attendance, slots: Vec<TimeRange>) -> Self {
        if slots.is_empty() {
            Self::unschedulable()
        } else {
            Self { attendance, slots }
        }
    }
}

/// Finds every slot in the day that fits a meeting request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FindMeetingQuery;

impl FindMeetingQuery {
    pub fn new() -> Self {
        Self
    }

    /// All slots that fit `request` given the day's `events`.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        self.query_outcome(events, request).slots
    }

    /// Like [`query`](Self::query), also reporting whether optional
    /// attendees were kept.
    pub fn query_outcome(&self, events: &[Event], request: &MeetingRequest) -> QueryOutcome {
        if request.duration > MINUTES_PER_DAY {
            debug!(
                duration = request.duration,
                "requested duration exceeds a day"
            );
            return QueryOutcome::unschedulable();
        }

        let required_gaps = find_free_slots(events, &request.attendees, request.duration);
        if request.optional_attendees.is_empty() {
            debug!(slots = required_gaps.len(), "no optional attendees");
            return QueryOutcome::tagged(Attendance::Everyone, required_gaps);
        }

        let combined_gaps = find_free_slots(events, &request.all_attendees(), request.duration);
        if !combined_gaps.is_empty() {
            debug!(
                slots = combined_gaps.len(),
                "optional attendees fit alongside required attendees"
            );
            return QueryOutcome::tagged(Attendance::Everyone, combined_gaps);
        }

        if request.attendees.is_empty() {
            debug!("only optional attendees requested and none share a free slot");
            return QueryOutcome::unschedulable();
        }

        debug!(
            optional = request.optional_attendees.len(),
            slots = required_gaps.len(),
            "dropping optional attendees"
        );
        QueryOutcome::tagged(Attendance::RequiredOnly, required_gaps)
    }

    /// The earliest slot that fits `request`, if any.
    pub fn first_slot(&self, events: &[Event], request: &MeetingRequest) -> Option<TimeRange> {
        self.query(events, request).into_iter().next()
    }
}

/// Shorthand for [`FindMeetingQuery::query`].
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    FindMeetingQuery.query(events, request)
}
