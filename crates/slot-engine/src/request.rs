//! Scheduling request parameters and validation.
//!
//! The request is constructed by the conversational layer and validated once
//! at the engine boundary. Invalid requests fail fast with
//! `SchedulingError::InvalidRequest`; no stage runs on a partially valid
//! request.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, NaiveTime, Timelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::error::{Result, SchedulingError};

pub const MIN_DURATION_MINUTES: u32 = 15;
pub const MAX_DURATION_MINUTES: u32 = 480;
pub const MAX_RESULTS_CAP: usize = 20;

const DEFAULT_ALIGNMENT_MINUTES: u32 = 15;
const DEFAULT_MAX_PER_DAY: usize = 4;

/// Parameters for one availability resolution.
///
/// Working days and hours are interpreted in `timezone` (default UTC); the
/// window bounds and all produced slots are UTC instants.
#[derive(Debug, Clone)]
pub struct SchedulingRequest {
    /// Participant identifiers (e.g., email addresses). Must be non-empty.
    pub attendees: BTreeSet<String>,
    pub duration_minutes: u32,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    /// Weekdays on which slots may be proposed. Default Mon-Fri.
    pub working_days: HashSet<Weekday>,
    pub working_hours_start: NaiveTime,
    pub working_hours_end: NaiveTime,
    /// Clock boundary candidate starts must fall on (e.g., 15 -> :00/:15/:30/:45).
    pub alignment_minutes: u32,
    pub max_results: usize,
    /// Cap on slots returned per calendar day.
    pub max_per_day: usize,
    /// Minimum attendees that must be free for a slot to qualify.
    /// `None` means all attendees.
    pub min_participants_available: Option<usize>,
    /// Timezone in which working days and hours are evaluated.
    pub timezone: Tz,
}

impl SchedulingRequest {
    /// Build a request with the default constraints: Mon-Fri, 09:00-17:00 UTC,
    /// 15-minute alignment, up to 20 results, 4 per day, all attendees required.
    pub fn new(
        attendees: impl IntoIterator<Item = impl Into<String>>,
        duration_minutes: u32,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Self {
        Self {
            attendees: attendees.into_iter().map(Into::into).collect(),
            duration_minutes,
            window_start,
            window_end,
            working_days: [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ]
            .into_iter()
            .collect(),
            working_hours_start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            working_hours_end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            alignment_minutes: DEFAULT_ALIGNMENT_MINUTES,
            max_results: MAX_RESULTS_CAP,
            max_per_day: DEFAULT_MAX_PER_DAY,
            min_participants_available: None,
            timezone: chrono_tz::UTC,
        }
    }

    /// The effective availability threshold: the explicit minimum, or the
    /// full attendee count when none was given.
    pub fn min_available(&self) -> usize {
        self.min_participants_available
            .unwrap_or(self.attendees.len())
    }

    /// Validate the request. Called once at the engine boundary.
    pub fn validate(&self) -> Result<()> {
        if self.attendees.is_empty() {
            return Err(invalid("attendees must be non-empty"));
        }
        if self.duration_minutes < MIN_DURATION_MINUTES
            || self.duration_minutes > MAX_DURATION_MINUTES
        {
            return Err(invalid(format!(
                "duration must be {}-{} minutes, got {}",
                MIN_DURATION_MINUTES, MAX_DURATION_MINUTES, self.duration_minutes
            )));
        }
        if self.window_start >= self.window_end {
            return Err(invalid(format!(
                "window start {} must precede window end {}",
                self.window_start, self.window_end
            )));
        }
        if self.working_hours_start >= self.working_hours_end {
            return Err(invalid("working hours start must precede end"));
        }
        if self.working_hours_start.second() != 0 || self.working_hours_end.second() != 0 {
            return Err(invalid("working hours must be whole minutes"));
        }
        if self.alignment_minutes == 0
            || self.alignment_minutes > 60
            || 60 % self.alignment_minutes != 0
        {
            return Err(invalid(format!(
                "alignment must divide 60 minutes, got {}",
                self.alignment_minutes
            )));
        }
        if self.max_results == 0 || self.max_results > MAX_RESULTS_CAP {
            return Err(invalid(format!(
                "max results must be 1-{}, got {}",
                MAX_RESULTS_CAP, self.max_results
            )));
        }
        if self.max_per_day == 0 {
            return Err(invalid("max per day must be at least 1"));
        }
        if let Some(min) = self.min_participants_available {
            if min == 0 || min > self.attendees.len() {
                return Err(invalid(format!(
                    "min participants available must be 1-{}, got {}",
                    self.attendees.len(),
                    min
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> SchedulingError {
    SchedulingError::InvalidRequest(message.into())
}
