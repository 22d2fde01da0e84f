//! Availability filtering: intersect candidate slots with participant
//! busy-sets.
//!
//! This stage only filters what the window generator produced. A participant
//! is available for a slot iff none of their merged busy intervals overlaps
//! it (half-open test, so back-to-back meetings do not conflict).

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interval::{ParticipantBusySet, TimeInterval};

/// A candidate slot annotated with who can and cannot attend.
///
/// Participant sets are ordered (`BTreeSet`) so downstream output is
/// deterministic regardless of the order busy-sets were fetched in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub available_participants: BTreeSet<String>,
    pub unavailable_participants: BTreeSet<String>,
}

impl CandidateSlot {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }
}

/// Filter candidate slots down to those where at least `min_available`
/// attendees are free.
///
/// Attendees with no entry in `busy_sets` are treated as fully available
/// (the calendar source could not say otherwise). Slots where nobody is
/// available are always dropped, whatever the threshold.
pub fn resolve(
    candidates: impl Iterator<Item = TimeInterval>,
    busy_sets: &BTreeMap<String, ParticipantBusySet>,
    attendees: &BTreeSet<String>,
    min_available: usize,
) -> Vec<CandidateSlot> {
    let mut resolved = Vec::new();

    for slot in candidates {
        let mut available = BTreeSet::new();
        let mut unavailable = BTreeSet::new();

        for attendee in attendees {
            let free = busy_sets
                .get(attendee)
                .map_or(true, |set| set.is_free_during(&slot));
            if free {
                available.insert(attendee.clone());
            } else {
                unavailable.insert(attendee.clone());
            }
        }

        if available.is_empty() || available.len() < min_available {
            continue;
        }

        resolved.push(CandidateSlot {
            start: slot.start,
            end: slot.end,
            available_participants: available,
            unavailable_participants: unavailable,
        });
    }

    resolved
}
