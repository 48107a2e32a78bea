//! Tests for the JSON query document.

use meeting_query::input::parse_events;
use meeting_query::{parse_query_input, FindMeetingQuery, MeetingError, TimeRange};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

#[test]
fn parses_full_document() {
    let json = r#"{
        "events": [
            { "title": "Standup", "attendees": ["alice", "bob"], "when": { "start": "09:00", "end": "09:30" } },
            { "attendees": ["carol"], "when": { "start": 600, "end": 660 } }
        ],
        "request": { "attendees": ["alice"], "optional_attendees": ["carol"], "duration": 30 }
    }"#;

    let input = parse_query_input(json).unwrap();

    assert_eq!(input.events.len(), 2);
    assert_eq!(input.events[0].title, "Standup");
    assert_eq!(input.events[0].when, range(540, 570));
    assert!(input.events[1].title.is_empty());
    assert_eq!(input.events[1].when, range(600, 660));

    let request = input.request.unwrap();
    assert!(request.attendees.contains("alice"));
    assert!(request.optional_attendees.contains("carol"));
    assert_eq!(request.duration, 30);
}

#[test]
fn missing_sections_default_to_empty() {
    let input = parse_query_input("{}").unwrap();
    assert!(input.events.is_empty());
    assert!(input.request.is_none());

    let input = parse_query_input(r#"{"request": {"duration": 15}}"#).unwrap();
    let request = input.request.unwrap();
    assert!(request.attendees.is_empty());
    assert!(request.optional_attendees.is_empty());
}

#[test]
fn parsed_document_drives_a_query() {
    let json = r#"{
        "events": [
            { "attendees": ["A"], "when": { "start": 0, "end": 60 } },
            { "attendees": ["A"], "when": { "start": 60, "end": 120 } }
        ],
        "request": { "attendees": ["A"], "duration": 30 }
    }"#;

    let input = parse_query_input(json).unwrap();
    let slots = FindMeetingQuery::new().query(&input.events, &input.request.unwrap());

    assert_eq!(slots, vec![range(120, 1440)]);
}

#[test]
fn invalid_range_is_a_json_error() {
    let json = r#"{"events": [{"attendees": ["A"], "when": {"start": 100, "end": 1500}}]}"#;
    let err = parse_query_input(json).unwrap_err();
    assert!(matches!(err, MeetingError::Json(_)));
    assert!(err.to_string().contains("Invalid interval"));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(parse_query_input("{ not json").is_err());
    assert!(parse_query_input(r#"{"request": {"duration": -5}}"#).is_err());
}

#[test]
fn parses_bare_event_array() {
    let events = parse_events(
        r#"[{"attendees": ["A"], "when": {"start": "22:00", "end": "23:59", "inclusive": true}}]"#,
    )
    .unwrap();
    assert_eq!(events[0].when, range(1320, 1440));
}
