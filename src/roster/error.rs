//! Error types for the activity roster.

use thiserror::Error;

/// All rejections a roster operation can return.
///
/// Every variant is an expected, caller-recoverable condition rather than
/// an internal fault; the web layer translates each to an HTTP status and
/// a `detail` message body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// No activity with this name exists in the roster.
    #[error("Activity not found")]
    NotFound,

    /// The student is already signed up for this activity.
    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    /// The student is not currently signed up for this activity.
    #[error("Participant not found in this activity")]
    ParticipantNotRegistered,

    /// The activity has reached its `max_participants` bound.
    #[error("Activity is already full")]
    CapacityExceeded,
}
