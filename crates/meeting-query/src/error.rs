//! Error types for meeting-query operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetingError {
    /// A range whose bounds are reversed or fall outside `[0, 1440]`.
    #[error("Invalid interval: [{start}, {end}) is not within a single day")]
    InvalidInterval { start: u32, end: u32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A clock string that is not `HH:MM`.
    #[error("Invalid clock time: {0}")]
    InvalidClock(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeetingError>;
