//! Candidate slot generation within working days and hours.
//!
//! Iterates the calendar days of the request window in the request timezone,
//! skips non-working weekdays, and emits aligned candidate start times whose
//! full duration fits inside that day's working hours and the overall window.
//!
//! The iterator is lazy (one day's slots are materialized at a time), finite,
//! and restartable by calling [`candidate_windows`] again.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};

use crate::interval::TimeInterval;
use crate::request::SchedulingRequest;

/// Enumerate candidate slots for `request`, ordered by start time.
///
/// Local times that do not exist or are ambiguous in the request timezone
/// (DST transitions) are skipped rather than guessed at -- a candidate that
/// cannot be pinned to a single UTC instant is not a usable meeting time.
///
/// A duration longer than every day's working span yields an empty iterator,
/// not an error.
pub fn candidate_windows(request: &SchedulingRequest) -> impl Iterator<Item = TimeInterval> + '_ {
    let first_day = request
        .window_start
        .with_timezone(&request.timezone)
        .date_naive();
    let last_day = request
        .window_end
        .with_timezone(&request.timezone)
        .date_naive();

    WorkingWindows {
        request,
        next_day: Some(first_day),
        last_day,
        buffer: Vec::new().into_iter(),
    }
}

struct WorkingWindows<'a> {
    request: &'a SchedulingRequest,
    next_day: Option<NaiveDate>,
    last_day: NaiveDate,
    buffer: std::vec::IntoIter<TimeInterval>,
}

impl Iterator for WorkingWindows<'_> {
    type Item = TimeInterval;

    fn next(&mut self) -> Option<TimeInterval> {
        loop {
            if let Some(slot) = self.buffer.next() {
                return Some(slot);
            }
            let day = self.next_day?;
            self.next_day = if day < self.last_day {
                day.succ_opt()
            } else {
                None
            };
            self.buffer = day_slots(self.request, day).into_iter();
        }
    }
}

/// All candidate slots for one local calendar day, clipped to the request
/// window.
fn day_slots(request: &SchedulingRequest, day: NaiveDate) -> Vec<TimeInterval> {
    if !request.working_days.contains(&day.weekday()) {
        return Vec::new();
    }

    let duration = Duration::minutes(i64::from(request.duration_minutes));
    let align = request.alignment_minutes;

    // First aligned clock boundary at or after the working-hours start.
    let start_minute =
        request.working_hours_start.hour() * 60 + request.working_hours_start.minute();
    let first_aligned = start_minute.div_ceil(align) * align;

    let midnight = day.and_time(NaiveTime::MIN);
    let working_end = day.and_time(request.working_hours_end);

    let mut slots = Vec::new();
    let mut cursor = midnight + Duration::minutes(i64::from(first_aligned));
    while cursor + duration <= working_end {
        // Pin the local start to a single UTC instant; skip DST gaps and
        // ambiguous repeats.
        if let Some(local) = request.timezone.from_local_datetime(&cursor).single() {
            let start = local.with_timezone(&Utc);
            let end = start + duration;
            if start >= request.window_start && end <= request.window_end {
                slots.push(TimeInterval::new(start, end));
            }
        }
        cursor += Duration::minutes(i64::from(align));
    }

    slots
}
