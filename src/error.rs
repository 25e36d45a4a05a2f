//! Error types for the timezone core.

use thiserror::Error;

/// Result type for core clock operations.
pub type Result<T> = std::result::Result<T, ClockError>;

/// Errors produced by the conversion and classification functions.
///
/// All failures are value returns and permanent for a given input; callers in
/// the presentation layer are expected to render a placeholder rather than
/// propagate them further.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// The string is not a recognized IANA timezone identifier.
    #[error("unrecognized IANA timezone: {0}")]
    InvalidTimezone(String),

    /// The wall-clock input does not parse to in-range H:M[:S] components.
    #[error("invalid wall-clock time (expected HH:MM[:SS]): {0:?}")]
    InvalidTimeFormat(String),

    /// An hour outside the 24-hour clock was passed to the classifier.
    #[error("hour out of range (expected 0-23): {0}")]
    HourOutOfRange(u32),
}
