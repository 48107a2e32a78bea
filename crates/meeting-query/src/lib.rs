//! # meeting-query
//!
//! Finds every interval in a single day when a meeting's attendees are free.
//!
//! Events tag the attendees they occupy. For a request, the busy time of the
//! required attendees is merged into non-overlapping blocks and the gaps long
//! enough for the meeting are returned. Optional attendees are included when
//! at least one slot works for everybody; otherwise only the required
//! attendees are considered.
//!
//! ## Quick start
//!
//! ```rust
//! use meeting_query::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![Event::new(
//!     "Standup",
//!     TimeRange::from_start_end(60, 120, false).unwrap(),
//!     ["alice"],
//! )];
//! let request = MeetingRequest::new(["alice"], 30);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeRange::from_start_end(0, 60, false).unwrap(),
//!         TimeRange::from_start_end(120, 1440, false).unwrap(),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`range`] -- `TimeRange` minutes-of-day interval and its relations
//! - [`meeting`] -- `Event` and `MeetingRequest`
//! - [`freebusy`] -- Busy-interval merging and free-gap derivation
//! - [`query`] -- `FindMeetingQuery`, the two-tier required/optional search
//! - [`clock`] -- `HH:MM` parsing and formatting
//! - [`input`] -- JSON query document
//! - [`error`] -- Error types

pub mod clock;
pub mod error;
pub mod freebusy;
pub mod input;
pub mod meeting;
pub mod query;
pub mod range;

pub use error::MeetingError;
pub use freebusy::{busy_intervals, free_gaps, merge_ranges};
pub use input::{parse_query_input, QueryInput};
pub use meeting::{Event, MeetingRequest};
pub use query::{find_meeting_times, Attendance, FindMeetingQuery, QueryOutcome};
pub use range::{TimeRange, END_OF_DAY, MINUTES_PER_DAY, START_OF_DAY};
