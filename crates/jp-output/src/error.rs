//! Error types for jp-output.

use thiserror::Error;

use jp_core::EdgeId;

/// Errors that can occur when replaying or writing results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Replay reached an edge whose service had already ended.  Only happens
    /// when replaying with a different timetable or start than the search.
    #[error("edge {edge} has no service at {at:.4} h")]
    ServiceClosed { edge: EdgeId, at: f64 },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
