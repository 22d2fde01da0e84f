//! # slot-engine
//!
//! Deterministic multi-participant availability resolution for scheduling
//! agents.
//!
//! Given a set of attendees, a meeting duration, a date window, and
//! working-hour constraints, the engine computes the time slots where enough
//! participants are simultaneously free, scores them with fixed heuristics,
//! and returns a ranked, capped list. The whole computation is a pure
//! function of the request and a busy-set snapshot, so identical inputs
//! always produce byte-identical output.
//!
//! ## Modules
//!
//! - [`interval`] — half-open `TimeInterval`, merging, per-participant busy-sets
//! - [`request`] — `SchedulingRequest` parameters and validation
//! - [`window`] — candidate slot generation within working days/hours
//! - [`resolver`] — availability filtering against busy-sets
//! - [`score`] — heuristic scoring with reproducible seeded jitter
//! - [`select`] — ranking, overlap dedupe, per-day caps, recommendation flags
//! - [`engine`] — the `CalendarSource` boundary and the orchestrating facade
//! - [`error`] — error types

pub mod engine;
pub mod error;
pub mod interval;
pub mod request;
pub mod resolver;
pub mod score;
pub mod select;
pub mod window;

pub use engine::{CalendarSource, SchedulingFacade};
pub use error::{CalendarSourceError, Result, SchedulingError};
pub use interval::{merge_intervals, ParticipantBusySet, TimeInterval};
pub use request::SchedulingRequest;
pub use resolver::{resolve, CandidateSlot};
pub use score::{derive_seed, score_slot, ScoredSlot};
pub use select::select;
pub use window::candidate_windows;
