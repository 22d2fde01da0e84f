//! Ranking, overlap dedupe, per-day capping, and recommendation flags.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::request::SchedulingRequest;
use crate::score::ScoredSlot;

/// Rank scored slots and shape them for presentation.
///
/// Per local calendar day: sort by score descending (earliest start breaks
/// ties), drop any slot overlapping an already-kept higher-ranked slot, keep
/// at most `max_per_day`, and flag the day's top slot as recommended. The
/// surviving slots are flattened back into start-time order and truncated to
/// `max_results`.
///
/// An empty input is a legitimate "no availability" result, not an error.
pub fn select(scored: Vec<ScoredSlot>, request: &SchedulingRequest) -> Vec<ScoredSlot> {
    let mut by_day: BTreeMap<NaiveDate, Vec<ScoredSlot>> = BTreeMap::new();
    for slot in scored {
        let day = slot.start.with_timezone(&request.timezone).date_naive();
        by_day.entry(day).or_default().push(slot);
    }

    let mut selected = Vec::new();
    for (_, mut day_slots) in by_day {
        day_slots.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.start.cmp(&b.start))
        });

        let mut kept: Vec<ScoredSlot> = Vec::new();
        for mut slot in day_slots {
            if kept.len() >= request.max_per_day {
                break;
            }
            // Overlap dedupe against higher-ranked keeps, not just exact
            // duplicates: two overlapping options are one choice, not two.
            if kept
                .iter()
                .any(|k| k.interval().overlaps(&slot.interval()))
            {
                continue;
            }
            slot.is_recommended = kept.is_empty();
            kept.push(slot);
        }
        selected.extend(kept);
    }

    selected.sort_by_key(|slot| slot.start);
    selected.truncate(request.max_results);
    selected
}
