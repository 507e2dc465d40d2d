//! A solution path replayed leg by leg.
//!
//! Replay recomputes each leg's wait and ride with the same
//! [`time_edge`](jp_search::time_edge) the searches use, so departure and
//! arrival clocks match what the search saw.

use jp_core::{EdgeId, GeoPoint, Mode, ModeTable, NodeId};
use jp_network::TransitNetwork;
use jp_schedule::Timetable;
use jp_search::{time_edge, SolutionPath, Speeds};

use crate::{OutputError, OutputResult};

/// Clock times of one leg, in hours of day.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LegTiming {
    /// Reaching the leg's first node.
    pub depart: f64,
    /// Hours spent waiting for the vehicle.
    pub wait_h: f64,
    /// Reaching the leg's last node.
    pub arrive: f64,
}

/// One edge of a journey.
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    pub edge:      EdgeId,
    pub mode:      Mode,
    pub from:      NodeId,
    pub to:        NodeId,
    pub length_km: f64,
    pub cost:      f64,
    /// `None` for untimed (standard search) itineraries.
    pub timing:    Option<LegTiming>,
}

/// A [`SolutionPath`] expanded into legs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Itinerary {
    pub nodes:             Vec<NodeId>,
    pub legs:              Vec<Leg>,
    /// Departure clock; `None` for untimed itineraries.
    pub start:             Option<f64>,
    pub total_distance_km: f64,
    pub total_cost:        f64,
}

impl Itinerary {
    /// Legs with distance and cost only.
    pub fn untimed(network: &TransitNetwork, path: &SolutionPath, rates: &ModeTable<f64>) -> Self {
        let legs = path
            .edges
            .iter()
            .map(|&e| leg(network, e, rates, None))
            .collect();
        Self::assemble(path, legs, None)
    }

    /// Legs with clock times, departing at `start`.
    ///
    /// # Errors
    ///
    /// [`OutputError::ServiceClosed`] if a leg's service has ended by the
    /// time it is reached.
    pub fn replay(
        network: &TransitNetwork,
        path: &SolutionPath,
        rates: &ModeTable<f64>,
        speeds: &Speeds,
        timetable: &Timetable,
        start: f64,
    ) -> OutputResult<Self> {
        let mut clock = start;
        let mut legs = Vec::with_capacity(path.edges.len());

        for &e in &path.edges {
            let i = e.index();
            let timing = time_edge(timetable, speeds, network.edge_mode[i], network.edge_length_km[i], clock)
                .ok_or(OutputError::ServiceClosed { edge: e, at: clock })?;
            let arrive = clock + timing.total_h();
            legs.push(leg(network, e, rates, Some(LegTiming { depart: clock, wait_h: timing.wait_h, arrive })));
            clock = arrive;
        }

        Ok(Self::assemble(path, legs, Some(start)))
    }

    fn assemble(path: &SolutionPath, legs: Vec<Leg>, start: Option<f64>) -> Self {
        Self {
            nodes: path.nodes.clone(),
            legs,
            start,
            total_distance_km: path.total_distance_km,
            total_cost: path.total_cost,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Clock time at the destination, for timed itineraries.
    pub fn arrival(&self) -> Option<f64> {
        match self.legs.last() {
            Some(leg) => leg.timing.map(|t| t.arrive),
            None => self.start,
        }
    }

    /// Every edge's polyline in travel order; an edge without geometry
    /// contributes its two end positions.
    pub fn geometry(&self, network: &TransitNetwork) -> Vec<GeoPoint> {
        let mut points = Vec::new();
        for leg in &self.legs {
            let shape = &network.edge_geometry[leg.edge.index()];
            if shape.is_empty() {
                points.push(network.pos(leg.from));
                points.push(network.pos(leg.to));
            } else {
                points.extend_from_slice(shape);
            }
        }
        points
    }
}

fn leg(network: &TransitNetwork, e: EdgeId, rates: &ModeTable<f64>, timing: Option<LegTiming>) -> Leg {
    let edge = network.edge(e);
    Leg {
        edge: e,
        mode: edge.mode,
        from: edge.from,
        to: edge.to,
        length_km: edge.length_km,
        cost: edge.length_km * rates[edge.mode],
        timing,
    }
}
