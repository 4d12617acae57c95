//! Scheduler error types

use thiserror::Error;

/// Errors raised when external input crosses into the scheduling engine.
///
/// The engine itself is total: once a quality or rating has been validated,
/// every computation succeeds. All variants here are caller contract
/// violations and carry no partial state change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Quality rating out of range (expected 0-5, got {0})")]
    InvalidQuality(u8),

    #[error("Unrecognized rating: {0}")]
    UnknownRating(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
