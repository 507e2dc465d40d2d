//! The six canonical queries.
//!
//! | # | Query                      | Search               | Modes             |
//! |---|----------------------------|----------------------|-------------------|
//! | 1 | Shortest distance (car)    | standard, distance   | road              |
//! | 2 | Cheapest (car, metro)      | standard, cost       | road, metro, walk |
//! | 3 | Cheapest (car, metro, bus) | standard, cost       | all               |
//! | 4 | Cheapest with start time   | time-dependent, cost | all               |
//! | 5 | Fastest with start time    | time-dependent, time | all               |
//! | 6 | Cheapest before deadline   | deadline             | all               |
//!
//! Rates are Tk per km, speeds km/h.

use anyhow::Result;
use tracing::warn;

use jp_core::{Mode, ModeSet, ModeTable, NodeId};
use jp_network::TransitNetwork;
use jp_output::Itinerary;
use jp_schedule::Timetable;
use jp_search::{
    DeadlineSearch, Objective, PathSearch, Speeds, StandardSearch, TimeDependentSearch,
    TimedObjective,
};

/// Which search a scenario runs.
#[derive(Copy, Clone, Debug)]
pub enum Query {
    Standard { objective: Objective },
    Timed { objective: TimedObjective, speeds: Speeds },
    Deadline { speeds: Speeds },
}

#[derive(Clone, Debug)]
pub struct Scenario {
    pub id:    u32,
    pub title: &'static str,
    pub rates: ModeTable<f64>,
    pub modes: ModeSet,
    pub query: Query,
}

/// Clock bounds of the graph part of the journey, after the walks to and
/// from the network have been taken off.
#[derive(Copy, Clone, Debug)]
pub struct Window {
    pub start:    f64,
    pub deadline: f64,
}

/// Timetables for the schedule-aware queries.
#[derive(Clone, Debug)]
pub struct Timetables {
    /// Queries 4 and 5.
    pub daily:    Timetable,
    /// Query 6.
    pub deadline: Timetable,
}

impl Default for Timetables {
    fn default() -> Self {
        Self { daily: Timetable::default(), deadline: Timetable::per_line() }
    }
}

fn standard_rates(bus_b: f64) -> ModeTable<f64> {
    ModeTable::splat(0.0)
        .with(Mode::Road, 20.0)
        .with(Mode::Metro, 5.0)
        .with(Mode::BusLineA, 7.0)
        .with(Mode::BusLineB, bus_b)
}

pub fn canonical() -> Vec<Scenario> {
    vec![
        Scenario {
            id: 1,
            title: "Shortest Distance (Car)",
            rates: ModeTable::splat(0.0).with(Mode::Road, 1.0),
            modes: ModeSet::of(&[Mode::Road]),
            query: Query::Standard { objective: Objective::Distance },
        },
        Scenario {
            id: 2,
            title: "Cheapest (Car, Metro)",
            rates: standard_rates(7.0),
            modes: ModeSet::of(&[Mode::Road, Mode::Metro, Mode::Walking]),
            query: Query::Standard { objective: Objective::Cost },
        },
        Scenario {
            id: 3,
            title: "Cheapest (Car, Metro, Bus)",
            rates: standard_rates(7.0),
            modes: ModeSet::all(),
            query: Query::Standard { objective: Objective::Cost },
        },
        Scenario {
            id: 4,
            title: "Cheapest with Start Time",
            rates: standard_rates(7.0),
            modes: ModeSet::all(),
            query: Query::Timed { objective: TimedObjective::Cost, speeds: Speeds::uniform(30.0) },
        },
        Scenario {
            id: 5,
            title: "Fastest with Start Time",
            rates: standard_rates(7.0),
            modes: ModeSet::all(),
            query: Query::Timed { objective: TimedObjective::Time, speeds: Speeds::uniform(10.0) },
        },
        Scenario {
            id: 6,
            title: "Constrained Cheapest (Deadlined)",
            rates: standard_rates(10.0),
            modes: ModeSet::all(),
            query: Query::Deadline {
                speeds: Speeds::uniform(20.0)
                    .with(Mode::Metro, 15.0)
                    .with(Mode::BusLineA, 10.0)
                    .with(Mode::BusLineB, 12.0),
            },
        },
    ]
}

impl Scenario {
    /// Run the query between two network nodes and expand the result.
    pub fn run(
        &self,
        network: &TransitNetwork,
        from: NodeId,
        to: NodeId,
        window: Window,
        timetables: &Timetables,
    ) -> Result<Itinerary> {
        let itinerary = match self.query {
            Query::Standard { objective } => {
                let path = StandardSearch::new(objective, self.rates, self.modes)?.search(network, from, to)?;
                Itinerary::untimed(network, &path, &self.rates)
            }
            Query::Timed { objective, speeds } => {
                let timetable = &timetables.daily;
                let path = TimeDependentSearch::new(objective, window.start, self.rates, speeds, self.modes, timetable.clone())?
                    .search(network, from, to)?;
                Itinerary::replay(network, &path, &self.rates, &speeds, timetable, window.start)?
            }
            Query::Deadline { speeds } => {
                if window.deadline < window.start {
                    warn!(
                        id = self.id,
                        start = window.start,
                        deadline = window.deadline,
                        "walking alone uses up the time before the deadline",
                    );
                    return Ok(Itinerary::default());
                }
                let timetable = &timetables.deadline;
                let search = DeadlineSearch::new(
                    window.start,
                    window.deadline,
                    self.rates,
                    speeds,
                    self.modes,
                    timetable.clone(),
                )?;
                let path = search.search(network, from, to)?;
                Itinerary::replay(network, &path, &self.rates, &speeds, timetable, window.start)?
            }
        };
        Ok(itinerary)
    }
}
