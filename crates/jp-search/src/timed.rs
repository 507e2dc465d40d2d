//! Schedule-aware Dijkstra.
//!
//! Each settled node carries its clock time and accumulated cost alongside
//! the objective value.  Relaxing an edge waits for the next departure of
//! its mode (zero for road and walking), then rides at the mode's speed;
//! an edge whose service has ended is skipped for that state.  Waits and
//! rides are non-negative, so label-setting stays correct on either axis.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use jp_core::{EdgeId, ModeSet, ModeTable, NodeId};
use jp_network::TransitNetwork;
use jp_schedule::Timetable;

use crate::config::{check_clock, check_endpoints, check_modes, check_rates, check_speeds};
use crate::path::backtrack;
use crate::state::Key;
use crate::timing::time_edge;
use crate::{PathSearch, SearchResult, SolutionPath, Speeds, TimedObjective};

/// Cheapest or fastest path departing at a given clock time.
#[derive(Clone, Debug)]
pub struct TimeDependentSearch {
    objective:  TimedObjective,
    start_time: f64,
    rates:      ModeTable<f64>,
    speeds:     Speeds,
    modes:      ModeSet,
    timetable:  Timetable,
}

impl TimeDependentSearch {
    /// `start_time` is in hours of day.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for a bad rate, a non-positive speed on an
    /// allowed mode, an empty mode set, or a non-finite start time.
    pub fn new(
        objective: TimedObjective,
        start_time: f64,
        rates: ModeTable<f64>,
        speeds: Speeds,
        modes: ModeSet,
        timetable: Timetable,
    ) -> SearchResult<Self> {
        check_rates(&rates)?;
        check_modes(modes)?;
        check_speeds(&speeds, modes)?;
        check_clock("start time", start_time)?;
        Ok(Self { objective, start_time, rates, speeds, modes, timetable })
    }

    pub fn objective(&self) -> TimedObjective { self.objective }
    pub fn start_time(&self) -> f64 { self.start_time }
}

impl PathSearch for TimeDependentSearch {
    fn search(&self, network: &TransitNetwork, from: NodeId, to: NodeId) -> SearchResult<SolutionPath> {
        check_endpoints(network, from, to)?;
        if from == to {
            return Ok(SolutionPath::trivial(from));
        }

        let n = network.node_count();
        let mut best      = vec![f64::INFINITY; n];
        let mut clock     = vec![f64::INFINITY; n];
        let mut cost      = vec![f64::INFINITY; n];
        let mut prev_edge = vec![EdgeId::INVALID; n];
        best[from.index()]  = 0.0;
        clock[from.index()] = self.start_time;
        cost[from.index()]  = 0.0;

        let mut heap: BinaryHeap<Reverse<(Key, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((Key(0.0), from)));
        let mut settled = 0usize;
        let mut closed_edges = 0usize;

        while let Some(Reverse((Key(value), node))) = heap.pop() {
            if value > best[node.index()] {
                continue;
            }
            settled += 1;
            if node == to {
                break;
            }
            // Strict improvement pushes each value once, so the tables still
            // describe the state that produced this entry.
            let now = clock[node.index()];
            let spent = cost[node.index()];

            for edge in network.out_edges(node) {
                let i = edge.index();
                let mode = network.edge_mode[i];
                if !self.modes.contains(mode) {
                    continue;
                }
                let length = network.edge_length_km[i];
                let Some(timing) = time_edge(&self.timetable, &self.speeds, mode, length, now) else {
                    closed_edges += 1;
                    continue;
                };

                let next_time = now + timing.total_h();
                let next_cost = spent + length * self.rates[mode];
                let candidate = match self.objective {
                    TimedObjective::Cost => next_cost,
                    TimedObjective::Time => next_time - self.start_time,
                };

                let neighbor = network.edge_to[i];
                if candidate < best[neighbor.index()] {
                    best[neighbor.index()]  = candidate;
                    clock[neighbor.index()] = next_time;
                    cost[neighbor.index()]  = next_cost;
                    prev_edge[neighbor.index()] = edge;
                    heap.push(Reverse((Key(candidate), neighbor)));
                }
            }
        }

        debug!(%from, %to, settled, closed_edges, objective = ?self.objective, "time-dependent search finished");

        if best[to.index()].is_infinite() {
            return Ok(SolutionPath::not_found());
        }
        let edges = backtrack(to, |node: NodeId| {
            let e = prev_edge[node.index()];
            e.is_valid().then(|| (e, network.edge_from[e.index()]))
        });
        let elapsed = clock[to.index()] - self.start_time;
        Ok(SolutionPath::along(network, from, edges, &self.rates, elapsed))
    }
}
