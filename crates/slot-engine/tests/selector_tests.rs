//! Tests for slot ranking, overlap dedupe, day caps, and recommendation.

use chrono::{Duration, TimeZone, Timelike, Utc};
use slot_engine::{select, SchedulingRequest, ScoredSlot};

fn request() -> SchedulingRequest {
    SchedulingRequest::new(
        ["a@x.com"],
        60,
        Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 21, 0, 0, 0).unwrap(),
    )
}

/// A 60-minute scored slot on the given March 2026 day at hour:minute.
fn slot(day: u32, hour: u32, minute: u32, score: f64) -> ScoredSlot {
    let start = Utc.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap();
    ScoredSlot {
        start,
        end: start + Duration::minutes(60),
        available_participants: ["a@x.com".to_string()].into_iter().collect(),
        unavailable_participants: Default::default(),
        score,
        is_recommended: false,
        reason: String::new(),
    }
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(select(Vec::new(), &request()).is_empty());
}

#[test]
fn per_day_cap_is_enforced() {
    let mut req = request();
    req.max_per_day = 3;
    let slots = vec![
        slot(16, 9, 0, 0.5),
        slot(16, 10, 0, 0.9),
        slot(16, 11, 0, 0.8),
        slot(16, 13, 0, 0.7),
        slot(16, 14, 0, 0.6),
        slot(16, 15, 0, 0.4),
    ];

    let selected = select(slots, &req);
    assert_eq!(selected.len(), 3);
    // The three highest scores survive.
    let starts: Vec<u32> = selected.iter().map(|s| s.start.hour()).collect();
    assert_eq!(starts, vec![10, 11, 13]);
}

#[test]
fn top_slot_per_day_is_recommended() {
    let slots = vec![
        slot(16, 9, 0, 0.6),
        slot(16, 14, 0, 0.9),
        slot(17, 10, 0, 0.8),
        slot(17, 15, 0, 0.7),
    ];

    let selected = select(slots, &request());

    let recommended: Vec<_> = selected.iter().filter(|s| s.is_recommended).collect();
    assert_eq!(recommended.len(), 2, "one per day");
    assert_eq!(
        recommended[0].start,
        Utc.with_ymd_and_hms(2026, 3, 16, 14, 0, 0).unwrap()
    );
    assert_eq!(
        recommended[1].start,
        Utc.with_ymd_and_hms(2026, 3, 17, 10, 0, 0).unwrap()
    );
}

#[test]
fn score_ties_recommend_the_earliest_start() {
    let slots = vec![slot(16, 14, 0, 0.8), slot(16, 9, 0, 0.8)];
    let selected = select(slots, &request());

    let recommended: Vec<_> = selected.iter().filter(|s| s.is_recommended).collect();
    assert_eq!(recommended.len(), 1);
    assert_eq!(
        recommended[0].start,
        Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap()
    );
}

#[test]
fn overlapping_lower_ranked_slots_are_dropped() {
    // 09:30 overlaps the higher-scored 09:00 and must go; 11:00 is clear.
    let slots = vec![
        slot(16, 9, 0, 0.9),
        slot(16, 9, 30, 0.8),
        slot(16, 11, 0, 0.7),
    ];

    let selected = select(slots, &request());
    let starts: Vec<_> = selected.iter().map(|s| s.start).collect();
    assert_eq!(
        starts,
        vec![
            Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 16, 11, 0, 0).unwrap(),
        ]
    );
}

#[test]
fn overlap_dedupe_does_not_consume_the_day_cap() {
    let mut req = request();
    req.max_per_day = 2;
    // The 09:30 slot is deduped, so 11:00 still fits under the cap.
    let slots = vec![
        slot(16, 9, 0, 0.9),
        slot(16, 9, 30, 0.8),
        slot(16, 11, 0, 0.7),
    ];

    let selected = select(slots, &req);
    assert_eq!(selected.len(), 2);
}

#[test]
fn output_is_ordered_by_start_and_truncated() {
    let mut req = request();
    req.max_results = 4;
    let slots = vec![
        slot(17, 10, 0, 0.9),
        slot(16, 14, 0, 0.8),
        slot(16, 9, 0, 0.7),
        slot(18, 11, 0, 0.85),
        slot(18, 15, 0, 0.6),
    ];

    let selected = select(slots, &req);
    assert_eq!(selected.len(), 4);
    assert!(selected.windows(2).all(|w| w[0].start < w[1].start));
}

#[test]
fn recommended_slot_has_the_day_maximum_score() {
    let slots = vec![
        slot(16, 9, 0, 0.4),
        slot(16, 10, 0, 0.95),
        slot(16, 13, 0, 0.6),
    ];
    let selected = select(slots, &request());

    let day_max = selected
        .iter()
        .map(|s| s.score)
        .fold(f64::MIN, f64::max);
    let recommended = selected.iter().find(|s| s.is_recommended).unwrap();
    assert_eq!(recommended.score, day_max);
}
