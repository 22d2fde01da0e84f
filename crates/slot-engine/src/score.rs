//! Heuristic slot scoring with reproducible seeded jitter.
//!
//! The score is a pure function of the slot and the request: availability
//! ratio dominates (weight 0.7), time-of-day and day-of-week preferences
//! split the remaining 0.3. The optional jitter exists for presentation
//! variety and is derived from SHA-256, never from wall-clock randomness or
//! language hash codes, so identical inputs always score bit-for-bit
//! identically.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::request::SchedulingRequest;
use crate::resolver::CandidateSlot;

const WEIGHT_AVAILABILITY: f64 = 0.7;
const WEIGHT_TIME_OF_DAY: f64 = 0.2;
const WEIGHT_DAY_OF_WEEK: f64 = 0.1;

/// Jitter stays within ±0.01 so it can reorder near-ties but never cross a
/// preference band.
const JITTER_SPAN: f64 = 0.02;

/// A candidate slot with its quality score and human-readable rationale.
///
/// Immutable once created; `is_recommended` is set by the selector for at
/// most one slot per calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub available_participants: std::collections::BTreeSet<String>,
    pub unavailable_participants: std::collections::BTreeSet<String>,
    /// Heuristic quality in `[0, 1]`. A ranking signal, not a probability.
    pub score: f64,
    pub is_recommended: bool,
    pub reason: String,
}

impl ScoredSlot {
    pub fn interval(&self) -> crate::interval::TimeInterval {
        crate::interval::TimeInterval::new(self.start, self.end)
    }
}

/// Derive the deterministic scoring seed for a request.
///
/// Stable across runs and processes: SHA-256 over the sorted attendee ids,
/// window bounds, and duration, truncated to the first 8 bytes (big-endian).
pub fn derive_seed(request: &SchedulingRequest) -> u64 {
    let mut hasher = Sha256::new();
    for attendee in &request.attendees {
        hasher.update(attendee.as_bytes());
        hasher.update([0u8]);
    }
    hasher.update(request.window_start.timestamp().to_be_bytes());
    hasher.update(request.window_end.timestamp().to_be_bytes());
    hasher.update(request.duration_minutes.to_be_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Score one candidate slot.
///
/// With `seed: Some(_)` a small per-slot jitter is mixed in, derived from
/// SHA-256 of the seed and the slot start, so the same request always
/// produces the same scores. With `None` the score is the bare weighted sum.
pub fn score_slot(
    slot: &CandidateSlot,
    request: &SchedulingRequest,
    seed: Option<u64>,
) -> ScoredSlot {
    let total = request.attendees.len();
    let free = slot.available_participants.len();
    let ratio = free as f64 / total as f64;

    let local_start = slot.start.with_timezone(&request.timezone);
    let time_pref = time_of_day_preference(local_start.hour());
    let day_pref = day_of_week_preference(local_start.weekday());

    let mut score = WEIGHT_AVAILABILITY * ratio
        + WEIGHT_TIME_OF_DAY * time_pref
        + WEIGHT_DAY_OF_WEEK * day_pref;
    if let Some(seed) = seed {
        score += slot_jitter(seed, slot.start);
    }
    let score = score.clamp(0.0, 1.0);

    let reason = format!(
        "{}/{} attendees free; {}, {}",
        free,
        total,
        describe_day(local_start.weekday()),
        describe_hour(local_start.hour())
    );

    ScoredSlot {
        start: slot.start,
        end: slot.end,
        available_participants: slot.available_participants.clone(),
        unavailable_participants: slot.unavailable_participants.clone(),
        score,
        is_recommended: false,
        reason,
    }
}

/// Mid-morning and early-afternoon starts score highest; the edges of the
/// working day lowest. Evaluated on the local start hour.
fn time_of_day_preference(hour: u32) -> f64 {
    match hour {
        10 | 14 => 1.0,
        9 | 11 | 13 | 15 => 0.75,
        8 | 12 | 16 => 0.5,
        _ => 0.25,
    }
}

/// Tue-Thu beat Mon/Fri; weekends trail (reachable only when the request
/// includes them in `working_days`).
fn day_of_week_preference(weekday: Weekday) -> f64 {
    match weekday {
        Weekday::Tue | Weekday::Wed | Weekday::Thu => 1.0,
        Weekday::Mon | Weekday::Fri => 0.6,
        Weekday::Sat | Weekday::Sun => 0.3,
    }
}

fn describe_hour(hour: u32) -> &'static str {
    match hour {
        10 | 14 => "prime meeting hour",
        9 | 11 | 13 | 15 => "good meeting hour",
        8 | 12 | 16 => "edge of the working day",
        _ => "off-peak hour",
    }
}

fn describe_day(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Tue | Weekday::Wed | Weekday::Thu => "mid-week",
        Weekday::Mon | Weekday::Fri => "edge of the week",
        Weekday::Sat | Weekday::Sun => "weekend",
    }
}

/// Per-slot jitter in `[-JITTER_SPAN/2, +JITTER_SPAN/2]`, reproducible from
/// the seed and the slot start alone.
fn slot_jitter(seed: u64, slot_start: DateTime<Utc>) -> f64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_be_bytes());
    hasher.update(slot_start.timestamp().to_be_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    let unit = u64::from_be_bytes(bytes) as f64 / u64::MAX as f64;
    (unit - 0.5) * JITTER_SPAN
}
