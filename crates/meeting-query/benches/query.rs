use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use meeting_query::{Event, FindMeetingQuery, MeetingRequest, TimeRange};

/// A crowded day: every attendee has a short event every 45 minutes, offset
/// per attendee so the merged busy time leaves scattered gaps.
fn crowded_day(attendees: usize) -> Vec<Event> {
    let mut events = Vec::new();
    for person in 0..attendees {
        let name = format!("person-{}", person);
        let offset = (person as u32 * 7) % 45;
        let mut start = offset;
        while start + 20 <= 1440 {
            let when = TimeRange::from_start_duration(start, 20).unwrap();
            events.push(Event::new("Busy", when, [name.clone()]));
            start += 45;
        }
    }
    events
}

fn bench_query(c: &mut Criterion) {
    let events = crowded_day(12);
    let query = FindMeetingQuery::new();

    let required = MeetingRequest::new(["person-0", "person-1"], 15);
    c.bench_function("query_required_only", |b| {
        b.iter(|| query.query(black_box(&events), black_box(&required)))
    });

    let with_optional = MeetingRequest::new(["person-0", "person-1"], 15)
        .with_optional_attendees((2..12).map(|i| format!("person-{}", i)));
    c.bench_function("query_with_optional_fallback", |b| {
        b.iter(|| query.query(black_box(&events), black_box(&with_optional)))
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
