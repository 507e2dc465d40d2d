//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown travel mode {0:?}")]
    UnknownMode(String),

    #[error("invalid clock time {0:?}: expected HH:MM")]
    InvalidClockTime(String),
}

/// Shorthand result type for `jp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
