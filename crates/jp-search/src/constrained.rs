//! Cheapest path arriving no later than a deadline.
//!
//! # Labels
//!
//! One scalar per node cannot answer this query: a dearer route may be the
//! only one on time, and a cheaper one may be late.  The search therefore
//! keeps an arena of labels `(node, cost, clock, parent)` and a per-node
//! Pareto frontier of live labels.  A new label is discarded when a label
//! at the same node already has cost ≤ and clock ≤ (identical labels
//! included); labels it dominates in turn are retired and skipped when
//! popped.  Waiting is FIFO (leaving later never means arriving earlier),
//! so a dominated label can never lead anywhere its dominator cannot.
//!
//! # Order and termination
//!
//! Labels pop by `(cost, clock, label index)`.  A label later than the
//! deadline is never created.  Popping the destination records it if it
//! beats the best so far and does not expand it.  Once the popped cost
//! reaches the best recorded cost nothing left in the queue can improve on
//! it and the search stops; [`DeadlineSearch::exhaustive`] drains the queue
//! instead.

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
use crate::{PathSearch, SearchError, SearchResult, SolutionPath, Speeds};

/// Index into the label arena.
type LabelIdx = usize;

struct Label {
    node:    NodeId,
    cost:    f64,
    clock:   f64,
    /// Label this one was expanded from; `None` for the origin.
    parent:  Option<LabelIdx>,
    /// Edge taken from the parent; `EdgeId::INVALID` for the origin.
    via:     EdgeId,
    retired: bool,
}

/// Cheapest journey from `start_time` that reaches the destination by
/// `deadline`, both in hours of day.
#[derive(Clone, Debug)]
pub struct DeadlineSearch {
    start_time: f64,
    deadline:   f64,
    rates:      ModeTable<f64>,
    speeds:     Speeds,
    modes:      ModeSet,
    timetable:  Timetable,
    pruning:    bool,
    early_exit: bool,
}

impl DeadlineSearch {
    /// # Errors
    ///
    /// `InvalidConfiguration` for a bad rate, a non-positive speed on an
    /// allowed mode, an empty mode set, a non-finite clock, or a deadline
    /// earlier than `start_time`.
    pub fn new(
        start_time: f64,
        deadline: f64,
        rates: ModeTable<f64>,
        speeds: Speeds,
        modes: ModeSet,
        timetable: Timetable,
    ) -> SearchResult<Self> {
        check_rates(&rates)?;
        check_modes(modes)?;
        check_speeds(&speeds, modes)?;
        check_clock("start time", start_time)?;
        check_clock("deadline", deadline)?;
        if deadline < start_time {
            return Err(SearchError::InvalidConfiguration(format!(
                "deadline {deadline} is earlier than start time {start_time}"
            )));
        }
        Ok(Self {
            start_time,
            deadline,
            rates,
            speeds,
            modes,
            timetable,
            pruning: true,
            early_exit: true,
        })
    }

    /// Drain the whole queue instead of stopping once no queued label can
    /// beat the best arrival.  Same answer, more work; used to check the
    /// stopping rule.
    pub fn exhaustive(mut self) -> Self {
        self.early_exit = false;
        self
    }

    /// Keep every label instead of pruning dominated ones.  Same optimal
    /// cost, exponentially more work.  Only terminates when every allowed
    /// edge takes positive time, so it is meant for small test graphs.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn start_time(&self) -> f64 { self.start_time }
    pub fn deadline(&self) -> f64 { self.deadline }
}

impl PathSearch for DeadlineSearch {
    fn search(&self, network: &TransitNetwork, from: NodeId, to: NodeId) -> SearchResult<SolutionPath> {
        check_endpoints(network, from, to)?;
        if from == to {
            return Ok(SolutionPath::trivial(from));
        }

        let mut labels: Vec<Label> = vec![Label {
            node:    from,
            cost:    0.0,
            clock:   self.start_time,
            parent:  None,
            via:     EdgeId::INVALID,
            retired: false,
        }];
        let mut frontier: Vec<Vec<LabelIdx>> = vec![Vec::new(); network.node_count()];
        frontier[from.index()].push(0);

        let mut heap: BinaryHeap<Reverse<(Key, Key, LabelIdx)>> = BinaryHeap::new();
        heap.push(Reverse((Key(0.0), Key(self.start_time), 0)));

        let mut best: Option<LabelIdx> = None;
        let mut best_cost = f64::INFINITY;
        let mut expanded = 0usize;
        let mut dominated = 0usize;

        while let Some(Reverse((Key(cost), Key(clock), idx))) = heap.pop() {
            if self.early_exit && cost >= best_cost {
                break;
            }
            let label = &labels[idx];
            if label.retired {
                continue;
            }
            let node = label.node;
            if node == to {
                if cost < best_cost {
                    best_cost = cost;
                    best = Some(idx);
                }
                continue;
            }
            expanded += 1;

            for edge in network.out_edges(node) {
                let i = edge.index();
                let mode = network.edge_mode[i];
                if !self.modes.contains(mode) {
                    continue;
                }
                let length = network.edge_length_km[i];
                let Some(timing) = time_edge(&self.timetable, &self.speeds, mode, length, clock) else {
                    continue;
                };
                let next_clock = clock + timing.total_h();
                if next_clock > self.deadline {
                    continue;
                }
                let next_cost = cost + length * self.rates[mode];
                let neighbor = network.edge_to[i];

                if self.pruning {
                    let slot = &mut frontier[neighbor.index()];
                    let covered = slot.iter().any(|&l| {
                        let other = &labels[l];
                        other.cost <= next_cost && other.clock <= next_clock
                    });
                    if covered {
                        dominated += 1;
                        continue;
                    }
                    slot.retain(|&l| {
                        let other = &mut labels[l];
                        let beaten = next_cost <= other.cost && next_clock <= other.clock;
                        if beaten {
                            other.retired = true;
                        }
                        !beaten
                    });
                }

                let next = labels.len();
                labels.push(Label {
                    node:    neighbor,
                    cost:    next_cost,
                    clock:   next_clock,
                    parent:  Some(idx),
                    via:     edge,
                    retired: false,
                });
                if self.pruning {
                    frontier[neighbor.index()].push(next);
                }
                heap.push(Reverse((Key(next_cost), Key(next_clock), next)));
            }
        }

        debug!(
            %from, %to,
            labels = labels.len(),
            expanded,
            dominated,
            found = best.is_some(),
            "deadline search finished",
        );

        let Some(best) = best else {
            return Ok(SolutionPath::not_found());
        };
        let edges = backtrack(best, |idx: LabelIdx| {
            let label = &labels[idx];
            label.parent.map(|p| (label.via, p))
        });
        let elapsed = labels[best].clock - self.start_time;
        Ok(SolutionPath::along(network, from, edges, &self.rates, elapsed))
    }
}
