//! Network-subsystem error type.

use thiserror::Error;

use jp_core::{Mode, NodeId};

/// Errors produced by `jp-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("mode {0} has no route file format")]
    UnsupportedMode(Mode),

    #[error("parse error on line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
