//! Calendar events and meeting requests, the inputs to a query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};
use crate::range::TimeRange;

/// An occupied interval shared by a set of attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Informational label; never consulted when scheduling.
    #[serde(default)]
    pub title: String,
    /// Everyone who is busy for the duration of `when`.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
    pub when: TimeRange,
}

impl Event {
    pub fn new<I, S>(title: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            attendees: attendees.into_iter().map(Into::into).collect(),
            when,
        }
    }

    /// True iff at least one of `attendees` is in this event.
    pub fn involves_any(&self, attendees: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(attendees)
    }
}

/// A request for a meeting of `duration` minutes.
///
/// An attendee listed as both required and optional is treated as required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Required attendees.
    #[serde(default)]
    pub attendees: BTreeSet<String>,
    #[serde(default)]
    pub optional_attendees: BTreeSet<String>,
    /// Length of the meeting in minutes. May exceed a day, in which case no
    /// slot is ever found.
    pub duration: u32,
}

impl MeetingRequest {
    pub fn new<I, S>(attendees: I, duration: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    pub fn with_optional_attendee(mut self, attendee: impl Into<String>) -> Self {
        self.optional_attendees.insert(attendee.into());
        self
    }

    pub fn with_optional_attendees<I, S>(mut self, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(attendees.into_iter().map(Into::into));
        self
    }

    /// Required and optional attendees together.
    pub fn all_attendees(&self) -> BTreeSet<String> {
        self.attendees
            .union(&self.optional_attendees)
            .cloned()
            .collect()
    }

    /// Reject requests that no caller should reasonably send.
    ///
    /// The query itself accepts a zero duration (any non-empty gap satisfies
    /// it); callers that want to refuse such requests call this first.
    ///
    /// # Errors
    /// Returns `MeetingError::InvalidInput` if `duration` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.duration == 0 {
            return Err(MeetingError::InvalidInput(
                "meeting duration must be at least one minute".to_string(),
            ));
        }
        Ok(())
    }
}
