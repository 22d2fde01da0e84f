//! Half-open time intervals and per-participant busy-sets.
//!
//! `TimeInterval` is the primitive every other module works in terms of:
//! `[start, end)` in UTC. Busy-sets are kept merged (no overlapping or
//! adjacent intervals) so that conflict tests can binary-search instead of
//! scanning the whole set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)` in UTC.
///
/// Invariant: `start < end`. Construction with an inverted or empty range is
/// a contract violation upstream and panics rather than being tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// # Panics
    /// Panics if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(
            start < end,
            "malformed interval: start {} >= end {}",
            start,
            end
        );
        Self { start, end }
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Adjacent intervals (one ends exactly when the other starts) do NOT
    /// overlap -- a meeting ending at 10:00 does not conflict with one
    /// starting at 10:00.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Merge overlapping or adjacent intervals into a sorted, disjoint list.
///
/// Input order does not matter. The result is sorted by start time and no two
/// intervals in it overlap or touch.
pub fn merge_intervals(mut intervals: Vec<TimeInterval>) -> Vec<TimeInterval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or adjacent -- extend the current interval.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// The merged busy intervals of one participant.
///
/// Built fresh per resolution request from the calendar source; the raw
/// intervals are merged on construction so membership tests stay logarithmic
/// regardless of how fragmented the source data is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantBusySet {
    pub participant_id: String,
    busy: Vec<TimeInterval>,
}

impl ParticipantBusySet {
    pub fn new(participant_id: impl Into<String>, intervals: Vec<TimeInterval>) -> Self {
        Self {
            participant_id: participant_id.into(),
            busy: merge_intervals(intervals),
        }
    }

    /// The merged intervals, sorted by start, disjoint and non-adjacent.
    pub fn busy(&self) -> &[TimeInterval] {
        &self.busy
    }

    /// Whether the participant has no busy interval overlapping `slot`.
    ///
    /// Binary-searches the merged set: the first interval ending after
    /// `slot.start` is the only one that can overlap, since every later
    /// interval starts at or after that interval's end.
    pub fn is_free_during(&self, slot: &TimeInterval) -> bool {
        let idx = self.busy.partition_point(|b| b.end <= slot.start);
        match self.busy.get(idx) {
            Some(b) => !b.overlaps(slot),
            None => true,
        }
    }
}
