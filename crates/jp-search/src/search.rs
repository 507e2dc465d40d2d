//! The common interface of every search.

use jp_core::NodeId;
use jp_network::TransitNetwork;

use crate::{SearchResult, SolutionPath};

/// A configured path search.
///
/// A search value holds only its validated configuration; all working state
/// (queue, best-known tables, labels) lives inside one `search` call, so one
/// value can serve many queries, from several threads at once.
///
/// # Errors
///
/// [`SearchError::InvalidNode`](crate::SearchError::InvalidNode) if either
/// endpoint is not a node of `network`.  An unreachable destination is not
/// an error; it yields [`SolutionPath::not_found`].
pub trait PathSearch: Send + Sync {
    fn search(&self, network: &TransitNetwork, from: NodeId, to: NodeId) -> SearchResult<SolutionPath>;
}
