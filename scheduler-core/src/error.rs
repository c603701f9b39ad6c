use thiserror::Error;

/// Every recoverable failure the scheduler can report.
///
/// The `Display` text of each variant is the exact message shown to the user,
/// so callers can print an error as-is and carry on with the next command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}: Invalid calendar date!")]
    InvalidDate(String),

    #[error("{0}: Event date must be a future date!")]
    PastDate(String),

    #[error("{0}: Event date must be within 6 months!")]
    BeyondBookingWindow(String),

    #[error("Invalid time slot!")]
    InvalidTimeslot(String),

    #[error("Invalid location!")]
    InvalidLocation(String),

    #[error("Invalid contact information!")]
    InvalidContact(String),

    #[error("Event duration must be at least 30 minutes and at most 120 minutes")]
    InvalidDuration(String),

    #[error("The event is already on the calendar.")]
    DuplicateEvent,

    #[error("Cannot remove; event is not in the calendar!")]
    EventNotFound,

    #[error("{command}: missing arguments, expected {expected}!")]
    MissingArguments {
        command: &'static str,
        expected: usize,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization failed: {0}")]
    Json(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
