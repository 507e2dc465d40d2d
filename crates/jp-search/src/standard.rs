//! Single-objective Dijkstra over the mode-filtered graph.
//!
//! Edges whose mode is not allowed are skipped entirely.  The weight of an
//! allowed edge is its length, or `length × rate[mode]` when optimising
//! cost.  Equal keys pop lowest `NodeId` first and relaxation is strict, so
//! among equal alternatives the first discovered in adjacency order is kept.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use jp_core::{EdgeId, ModeSet, ModeTable, NodeId};
use jp_network::TransitNetwork;

use crate::config::{check_endpoints, check_modes, check_rates};
use crate::path::backtrack;
use crate::state::Key;
use crate::{Objective, PathSearch, SearchResult, SolutionPath};

/// Shortest-distance or cheapest path, no clock involved.
///
/// # Example
///
/// ```
/// use jp_core::{GeoPoint, Mode, ModeSet, ModeTable};
/// use jp_network::NetworkBuilder;
/// use jp_search::{Objective, PathSearch, StandardSearch};
///
/// let mut b = NetworkBuilder::new();
/// let a = b.node_at(GeoPoint::new(23.80, 90.36));
/// let c = b.node_at(GeoPoint::new(23.81, 90.37));
/// b.add_link(a, c, 1.5, Mode::Road, vec![]);
/// let net = b.build();
///
/// let search = StandardSearch::new(
///     Objective::Distance,
///     ModeTable::splat(0.0).with(Mode::Road, 20.0),
///     ModeSet::of(&[Mode::Road]),
/// ).unwrap();
/// let path = search.search(&net, a, c).unwrap();
/// assert_eq!(path.edges.len(), 1);
/// assert_eq!(path.total_cost, 30.0);
/// ```
#[derive(Clone, Debug)]
pub struct StandardSearch {
    objective: Objective,
    rates:     ModeTable<f64>,
    modes:     ModeSet,
}

impl StandardSearch {
    /// # Errors
    ///
    /// `InvalidConfiguration` for a negative or non-finite rate or an empty
    /// mode set.
    pub fn new(objective: Objective, rates: ModeTable<f64>, modes: ModeSet) -> SearchResult<Self> {
        check_rates(&rates)?;
        check_modes(modes)?;
        Ok(Self { objective, rates, modes })
    }

    pub fn objective(&self) -> Objective { self.objective }
    pub fn modes(&self) -> ModeSet { self.modes }

    #[inline]
    fn weight(&self, network: &TransitNetwork, edge: EdgeId) -> f64 {
        let length = network.edge_length_km[edge.index()];
        match self.objective {
            Objective::Distance => length,
            Objective::Cost => length * self.rates[network.edge_mode[edge.index()]],
        }
    }
}

impl PathSearch for StandardSearch {
    fn search(&self, network: &TransitNetwork, from: NodeId, to: NodeId) -> SearchResult<SolutionPath> {
        check_endpoints(network, from, to)?;
        if from == to {
            return Ok(SolutionPath::trivial(from));
        }

        let n = network.node_count();
        // dist[v] = best known weight to reach v.
        let mut dist      = vec![f64::INFINITY; n];
        // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
        let mut prev_edge = vec![EdgeId::INVALID; n];
        dist[from.index()] = 0.0;

        let mut heap: BinaryHeap<Reverse<(Key, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((Key(0.0), from)));
        let mut settled = 0usize;

        while let Some(Reverse((Key(weight), node))) = heap.pop() {
            // Skip stale heap entries.
            if weight > dist[node.index()] {
                continue;
            }
            settled += 1;
            if node == to {
                break;
            }

            for edge in network.out_edges(node) {
                if !self.modes.contains(network.edge_mode[edge.index()]) {
                    continue;
                }
                let neighbor = network.edge_to[edge.index()];
                let candidate = weight + self.weight(network, edge);

                if candidate < dist[neighbor.index()] {
                    dist[neighbor.index()] = candidate;
                    prev_edge[neighbor.index()] = edge;
                    heap.push(Reverse((Key(candidate), neighbor)));
                }
            }
        }

        debug!(%from, %to, settled, objective = ?self.objective, "standard search finished");

        if dist[to.index()].is_infinite() {
            return Ok(SolutionPath::not_found());
        }
        let edges = backtrack(to, |node: NodeId| {
            let e = prev_edge[node.index()];
            e.is_valid().then(|| (e, network.edge_from[e.index()]))
        });
        Ok(SolutionPath::along(network, from, edges, &self.rates, 0.0))
    }
}
