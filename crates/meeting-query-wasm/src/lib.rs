//! WASM bindings for meeting-query.
//!
//! Exposes the meeting slot search and busy-interval merging to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-query-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-query-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_query_wasm.wasm
//! ```

use std::collections::BTreeSet;

use meeting_query::error::Result;
use meeting_query::input::parse_events;
use meeting_query::{busy_intervals, parse_query_input, FindMeetingQuery, MeetingError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// JSON-in, JSON-out implementations (callable from native code and tests)
// ---------------------------------------------------------------------------

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Run a meeting query over a `{ events, request }` document.
///
/// Returns a JSON object `{ attendance, slots }` where `slots` is an array of
/// `{ start, end }` minute ranges.
///
/// # Errors
/// Returns `MeetingError::Json` for malformed input and
/// `MeetingError::InvalidInput` if the document has no request.
pub fn find_meeting_times_json(input_json: &str) -> Result<String> {
    let input = parse_query_input(input_json)?;
    let request = input
        .request
        .ok_or_else(|| MeetingError::InvalidInput("missing \"request\" section".to_string()))?;

    let outcome = FindMeetingQuery::new().query_outcome(&input.events, &request);
    to_json(&outcome)
}

/// Merge the busy time of the given attendees.
///
/// `events_json` is a JSON array of events and `attendees_json` a JSON array
/// of attendee names. Returns a JSON array of `{ start, end }` ranges.
///
/// # Errors
/// Returns `MeetingError::Json` if either argument is malformed.
pub fn busy_intervals_json(events_json: &str, attendees_json: &str) -> Result<String> {
    let events = parse_events(events_json)?;
    let attendees: BTreeSet<String> = serde_json::from_str(attendees_json)?;

    to_json(&busy_intervals(&events, &attendees))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

fn to_js_error(e: MeetingError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Find every slot that fits the request in a `{ events, request }` JSON
/// document. Returns the JSON-encoded outcome.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(input_json: &str) -> std::result::Result<String, JsValue> {
    find_meeting_times_json(input_json).map_err(to_js_error)
}

/// Merged busy time of the attendees in `attendees_json` across
/// `events_json`. Returns a JSON array of ranges.
#[wasm_bindgen(js_name = "busyIntervals")]
pub fn busy_intervals_js(
    events_json: &str,
    attendees_json: &str,
) -> std::result::Result<String, JsValue> {
    busy_intervals_json(events_json, attendees_json).map_err(to_js_error)
}
