//! Search error type.

use thiserror::Error;

use jp_core::NodeId;

/// Errors produced by `jp-search`.
///
/// Both variants are raised before any search work starts.
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    #[error("node {0} is not in the network")]
    InvalidNode(NodeId),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type SearchResult<T> = Result<T, SearchError>;
