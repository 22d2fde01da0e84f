//! Error types for availability resolution.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulingError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Calendar source unavailable: {0}")]
    SourceUnavailable(String),
}

/// A failure reported by a [`CalendarSource`](crate::CalendarSource).
///
/// Carries the participant the lookup was for when the failure is scoped to a
/// single attendee; `None` means the whole batch call failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("calendar lookup failed: {message}")]
pub struct CalendarSourceError {
    pub participant: Option<String>,
    pub message: String,
}

impl CalendarSourceError {
    pub fn batch(message: impl Into<String>) -> Self {
        Self {
            participant: None,
            message: message.into(),
        }
    }

    pub fn for_participant(participant: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            participant: Some(participant.into()),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchedulingError>;
