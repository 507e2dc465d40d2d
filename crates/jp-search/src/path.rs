//! Search results and shared path assembly.

use jp_core::{EdgeId, Mode, ModeTable, NodeId};
use jp_network::TransitNetwork;

// ── SolutionPath ──────────────────────────────────────────────────────────────

/// The answer to one query.
///
/// | Shape                       | Meaning                          |
/// |-----------------------------|----------------------------------|
/// | no nodes, no edges          | no path (see [`is_found`](Self::is_found)) |
/// | one node, no edges          | origin equals destination        |
/// | `k + 1` nodes, `k` edges    | a journey                        |
///
/// Distance and cost are always recomputed from `edges`, whatever the
/// search optimised.  `total_time_h` is elapsed clock time for
/// schedule-aware searches and `0.0` for [`StandardSearch`](crate::StandardSearch).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SolutionPath {
    pub nodes:             Vec<NodeId>,
    pub edges:             Vec<EdgeId>,
    pub total_distance_km: f64,
    pub total_cost:        f64,
    pub total_time_h:      f64,
}

impl SolutionPath {
    /// The "no path" result.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Zero-length journey that starts and ends at `node`.
    pub fn trivial(node: NodeId) -> Self {
        Self { nodes: vec![node], ..Self::default() }
    }

    pub fn is_found(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// `true` if origin and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Mode of each edge, in travel order.
    pub fn modes<'a>(&'a self, network: &'a TransitNetwork) -> impl Iterator<Item = Mode> + 'a {
        self.edges.iter().map(|e| network.edge_mode[e.index()])
    }

    /// Assemble a path from `start` along `edges`, summing distance and
    /// cost edge by edge in travel order.
    pub(crate) fn along(
        network: &TransitNetwork,
        start: NodeId,
        edges: Vec<EdgeId>,
        rates: &ModeTable<f64>,
        total_time_h: f64,
    ) -> Self {
        let mut nodes = Vec::with_capacity(edges.len() + 1);
        nodes.push(start);
        let mut total_distance_km = 0.0;
        let mut total_cost = 0.0;

        for &e in &edges {
            let i = e.index();
            let length = network.edge_length_km[i];
            total_distance_km += length;
            total_cost += length * rates[network.edge_mode[i]];
            nodes.push(network.edge_to[i]);
        }

        Self { nodes, edges, total_distance_km, total_cost, total_time_h }
    }
}

// ── Backtracking ──────────────────────────────────────────────────────────────

/// Follow predecessor links from `last` back to the origin and return the
/// edges in travel order.
///
/// `step(k)` yields the edge that reached `k` and the predecessor key, or
/// `None` at the origin.  Works for per-node tables (`K = NodeId`) and for
/// label arenas (`K` = label index) alike.
pub(crate) fn backtrack<K: Copy>(last: K, mut step: impl FnMut(K) -> Option<(EdgeId, K)>) -> Vec<EdgeId> {
    let mut edges = Vec::new();
    let mut cur = last;
    while let Some((edge, prev)) = step(cur) {
        edges.push(edge);
        cur = prev;
    }
    edges.reverse();
    edges
}
