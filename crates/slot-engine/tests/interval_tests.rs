//! Tests for interval merging and busy-set membership.

use chrono::{TimeZone, Utc};
use slot_engine::{merge_intervals, ParticipantBusySet, TimeInterval};

/// Helper to build an interval on 2026-03-16 from hour/minute pairs.
fn iv(start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> TimeInterval {
    TimeInterval::new(
        Utc.with_ymd_and_hms(2026, 3, 16, start_h, start_m, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 16, end_h, end_m, 0).unwrap(),
    )
}

#[test]
fn merge_of_empty_input_is_empty() {
    assert!(merge_intervals(Vec::new()).is_empty());
}

#[test]
fn merge_coalesces_overlapping_intervals() {
    let merged = merge_intervals(vec![iv(9, 0, 11, 0), iv(10, 0, 12, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 12, 0)]);
}

#[test]
fn merge_coalesces_adjacent_intervals() {
    // 09:00-10:00 and 10:00-11:00 touch; a busy-set treats them as one block.
    let merged = merge_intervals(vec![iv(9, 0, 10, 0), iv(10, 0, 11, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 11, 0)]);
}

#[test]
fn merge_sorts_and_preserves_disjoint_intervals() {
    let merged = merge_intervals(vec![iv(14, 0, 15, 0), iv(9, 0, 10, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 10, 0), iv(14, 0, 15, 0)]);
}

#[test]
fn merge_handles_containment() {
    let merged = merge_intervals(vec![iv(9, 0, 17, 0), iv(10, 0, 11, 0)]);
    assert_eq!(merged, vec![iv(9, 0, 17, 0)]);
}

#[test]
fn busy_set_merges_on_construction() {
    let set = ParticipantBusySet::new(
        "a@x.com",
        vec![iv(10, 0, 11, 0), iv(9, 0, 10, 0), iv(13, 0, 14, 0)],
    );
    assert_eq!(set.busy(), &[iv(9, 0, 11, 0), iv(13, 0, 14, 0)]);
}

#[test]
fn free_during_gap_between_busy_blocks() {
    let set = ParticipantBusySet::new("a@x.com", vec![iv(9, 0, 10, 0), iv(13, 0, 14, 0)]);
    assert!(set.is_free_during(&iv(11, 0, 12, 0)));
}

#[test]
fn not_free_when_slot_overlaps_busy_block() {
    let set = ParticipantBusySet::new("a@x.com", vec![iv(10, 0, 11, 0)]);
    assert!(!set.is_free_during(&iv(10, 30, 11, 30)));
    assert!(!set.is_free_during(&iv(9, 30, 10, 30)));
    // Slot containing the busy block entirely.
    assert!(!set.is_free_during(&iv(9, 0, 12, 0)));
}

#[test]
fn free_for_back_to_back_slots() {
    // Half-open semantics: a meeting ending at 10:00 does not block a slot
    // starting at 10:00, and vice versa.
    let set = ParticipantBusySet::new("a@x.com", vec![iv(10, 0, 11, 0)]);
    assert!(set.is_free_during(&iv(9, 0, 10, 0)));
    assert!(set.is_free_during(&iv(11, 0, 12, 0)));
}

#[test]
fn free_everywhere_with_empty_busy_set() {
    let set = ParticipantBusySet::new("a@x.com", Vec::new());
    assert!(set.is_free_during(&iv(9, 0, 17, 0)));
}
