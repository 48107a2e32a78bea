//! JSON input document shared by the command-line and WASM front ends.
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "attendees": ["alice"], "when": { "start": "09:00", "end": "09:30" } }
//!   ],
//!   "request": { "attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30 }
//! }
//! ```
//!
//! Range bounds may be minute counts or `"HH:MM"` strings, and accept an
//! optional `"inclusive": true` to make the end minute part of the range.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::meeting::{Event, MeetingRequest};

/// A day's events plus an optional meeting request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryInput {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub request: Option<MeetingRequest>,
}

/// Parse a query document.
///
/// # Errors
/// Returns `MeetingError::Json` for malformed JSON or ranges that fail
/// validation.
pub fn parse_query_input(json: &str) -> Result<QueryInput> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a bare JSON array of events.
///
/// # Errors
/// Returns `MeetingError::Json` for malformed JSON or invalid ranges.
pub fn parse_events(json: &str) -> Result<Vec<Event>> {
    Ok(serde_json::from_str(json)?)
}
