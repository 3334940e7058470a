//! Core error types for cue and style validation
//!
//! The compiler itself is total over string inputs (unknown enum values
//! degrade to defaults), so errors here cover only structural problems the
//! HTTP boundary must reject before any work happens: malformed cue spans
//! and empty cue text. Uses `thiserror` for structured errors, matching the
//! rest of the workspace.

use thiserror::Error;

/// Validation error for request-supplied cue data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Cue end time is not strictly after its start time
    #[error("cue {index}: end time {end} must be greater than start time {start}")]
    InvalidSpan {
        /// Zero-based position of the offending cue in the request
        index: usize,
        /// Cue start in seconds
        start: f64,
        /// Cue end in seconds
        end: f64,
    },

    /// Cue start time is negative
    #[error("cue {index}: start time {start} must not be negative")]
    NegativeStart {
        /// Zero-based position of the offending cue in the request
        index: usize,
        /// Cue start in seconds
        start: f64,
    },

    /// Cue text is empty after trimming
    #[error("cue {index}: text is empty")]
    EmptyText {
        /// Zero-based position of the offending cue in the request
        index: usize,
    },
}
