//! The calendar source boundary and the end-to-end scheduling facade.
//!
//! The facade runs the linear pipeline
//! Validate -> FetchBusySets -> GenerateCandidates -> Resolve -> Score ->
//! Select. Only the fetch stage does I/O; everything after it is pure, so a
//! given request and busy-set snapshot always produce byte-identical output.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::{CalendarSourceError, Result, SchedulingError};
use crate::interval::{ParticipantBusySet, TimeInterval};
use crate::request::SchedulingRequest;
use crate::resolver::resolve;
use crate::score::{derive_seed, score_slot, ScoredSlot};
use crate::select::select;
use crate::window::candidate_windows;

/// Provider of busy intervals per participant.
///
/// The adapter behind this trait (Graph, CalDAV, a fixture map in tests) is
/// responsible for translating provider response shapes into plain
/// `TimeInterval` sequences. Implementations should answer the whole batch in
/// one call where the provider supports it; the facade falls back to
/// per-participant calls when the batch fails.
pub trait CalendarSource {
    fn busy_intervals(
        &self,
        participant_ids: &[String],
        window: TimeInterval,
    ) -> std::result::Result<BTreeMap<String, Vec<TimeInterval>>, CalendarSourceError>;
}

/// Stateless orchestrator for availability resolution.
///
/// Holds no state between calls; concurrent invocations are independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulingFacade;

impl SchedulingFacade {
    pub fn new() -> Self {
        Self
    }

    /// Compute the ranked available slots for `request`.
    ///
    /// Zero qualifying slots is a normal `Ok(vec![])` result -- the caller
    /// turns it into "no availability" messaging. Errors are reserved for a
    /// malformed request and for total calendar-source collapse.
    pub fn find_available_slots<S: CalendarSource>(
        &self,
        request: &SchedulingRequest,
        source: &S,
    ) -> Result<Vec<ScoredSlot>> {
        request.validate()?;

        let busy_sets = self.fetch_busy_sets(request, source)?;

        let candidates = candidate_windows(request);
        let resolved = resolve(
            candidates,
            &busy_sets,
            &request.attendees,
            request.min_available(),
        );
        debug!(
            candidates = resolved.len(),
            attendees = request.attendees.len(),
            "resolved candidate slots"
        );

        let seed = derive_seed(request);
        let scored: Vec<ScoredSlot> = resolved
            .iter()
            .map(|slot| score_slot(slot, request, Some(seed)))
            .collect();

        Ok(select(scored, request))
    }

    /// Fetch busy-sets for every attendee, batched first.
    ///
    /// A failed batch call falls back to one call per attendee; an attendee
    /// whose lookup fails is treated as fully available and the failure is
    /// logged. Only when the batch AND every per-attendee call fail does the
    /// request error with `SourceUnavailable`.
    fn fetch_busy_sets<S: CalendarSource>(
        &self,
        request: &SchedulingRequest,
        source: &S,
    ) -> Result<BTreeMap<String, ParticipantBusySet>> {
        let ids: Vec<String> = request.attendees.iter().cloned().collect();
        let window = TimeInterval::new(request.window_start, request.window_end);

        match source.busy_intervals(&ids, window) {
            Ok(mut intervals_by_id) => Ok(ids
                .iter()
                .map(|id| {
                    // Attendees the source did not report are fully available.
                    let intervals = intervals_by_id.remove(id).unwrap_or_default();
                    (id.clone(), ParticipantBusySet::new(id.clone(), intervals))
                })
                .collect()),
            Err(batch_err) => {
                warn!(error = %batch_err, "batch busy lookup failed; retrying per attendee");
                let mut busy_sets = BTreeMap::new();
                let mut failures = 0usize;

                for id in &ids {
                    match source.busy_intervals(std::slice::from_ref(id), window) {
                        Ok(mut intervals_by_id) => {
                            let intervals = intervals_by_id.remove(id).unwrap_or_default();
                            busy_sets
                                .insert(id.clone(), ParticipantBusySet::new(id.clone(), intervals));
                        }
                        Err(err) => {
                            failures += 1;
                            warn!(
                                participant = %id,
                                error = %err,
                                "busy lookup failed; treating attendee as fully available"
                            );
                            busy_sets
                                .insert(id.clone(), ParticipantBusySet::new(id.clone(), Vec::new()));
                        }
                    }
                }

                if failures == ids.len() {
                    return Err(SchedulingError::SourceUnavailable(batch_err.to_string()));
                }
                Ok(busy_sets)
            }
        }
    }
}
