//! Error types for the timeline crate

use thiserror::Error;

/// Errors that can occur while driving a session timeline
///
/// Illegal drag gestures are not an error: they are rejected silently with a
/// visual snap-back, matching drag-and-drop chess UI ergonomics. The only
/// fallible path left is reloading a stored position encoding.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A stored position encoding could not be parsed or is not a legal
    /// chess position
    #[error("invalid position encoding: {fen}")]
    InvalidFen { fen: String },
}

/// Result type alias for timeline operations
pub type TimelineResult<T> = Result<T, TimelineError>;
