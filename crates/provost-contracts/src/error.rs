//! Error types for the Provost workflow engine.
//!
//! All fallible operations in the Provost crates return `ProvostResult<T>`.
//! Error variants carry enough context to produce actionable messages for
//! the presentation layer; the engine never retries on its own.

use thiserror::Error;

/// The unified error type for the Provost workflow engine.
#[derive(Debug, Error)]
pub enum ProvostError {
    /// A submitted payload is malformed: a required field is blank, the
    /// score is out of range, or a supplied grade disagrees with the score.
    #[error("validation failed: {reason}")]
    Validation { reason: String },

    /// The acting caller lacks the role or identity the operation requires.
    #[error("not authorized: {reason}")]
    Authorization { reason: String },

    /// The referenced result id does not exist in the store.
    #[error("result '{result_id}' not found")]
    NotFound { result_id: String },

    /// The operation was attempted out of turn or on a terminal result.
    ///
    /// A frozen (rejected or fully approved) chain accepts no further
    /// transitions; neither does a step whose turn has not yet come.
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    /// The audit ledger could not persist an entry.
    ///
    /// This is treated as fatal — a mutation that cannot be audited cannot
    /// commit.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// A directory roster or other configuration input is missing or invalid.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used throughout the Provost crates.
pub type ProvostResult<T> = Result<T, ProvostError>;
