//! Human-readable journey description.
//!
//! ```text
//! === Problem 4: Cheapest with start time ===
//! Problem No: 4
//! Nodes: 5
//! Start: 5:47 PM
//! 5:47 PM - 5:52 PM, Cost: 41.20 Tk: Ride Car (2.06 km) from RoadIntersection to Mirpur 10
//! 5:52 PM - 6:10 PM, Cost: 44.35 Tk: Ride Metro (8.87 km) from Mirpur 10 to Motijheel (Wait: 3 min)
//! Total Dist: 10.93 km
//! Total Cost: 85.55 Tk
//! Arrival: 6:10 PM
//! ```

use std::io::{self, Write};

use jp_core::{ClockTime, NodeId};
use jp_network::TransitNetwork;

use crate::{Itinerary, OutputResult, Solution, SolutionWriter};

/// Label for nodes without a station name.
const UNNAMED_NODE: &str = "RoadIntersection";

/// Writes each solution's description to `out`.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextReport<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SolutionWriter for TextReport<W> {
    fn write(&mut self, solution: &Solution<'_>) -> OutputResult<()> {
        writeln!(self.out, "=== Problem {}: {} ===", solution.id, solution.title)?;
        write_description(&mut self.out, solution.network, solution.itinerary, solution.id)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Describe `itinerary` leg by leg, followed by totals and (when timed)
/// the arrival clock.
pub fn write_description<W: Write>(
    out: &mut W,
    network: &TransitNetwork,
    itinerary: &Itinerary,
    id: u32,
) -> io::Result<()> {
    if !itinerary.is_found() {
        writeln!(out, "No path found.")?;
        return writeln!(out);
    }

    writeln!(out, "Problem No: {id}")?;
    writeln!(out, "Nodes: {}", itinerary.nodes.len())?;
    if let Some(start) = itinerary.start {
        writeln!(out, "Start: {}", ClockTime(start))?;
    }

    for leg in &itinerary.legs {
        let ride = format!(
            "Ride {} ({:.2} km) from {} to {}",
            leg.mode.display_name(),
            leg.length_km,
            label(network, leg.from),
            label(network, leg.to),
        );
        match leg.timing {
            Some(t) => {
                write!(
                    out,
                    "{} - {}, Cost: {:.2} Tk: {ride}",
                    ClockTime(t.depart),
                    ClockTime(t.arrive),
                    leg.cost,
                )?;
                if t.wait_h > 0.0 {
                    // Nearest minute: 10/60 h * 60 is 9.999… in f64.
                    write!(out, " (Wait: {} min)", (t.wait_h * 60.0).round() as i64)?;
                }
                writeln!(out)?;
            }
            None => writeln!(out, "{ride} Cost: {:.2}", leg.cost)?,
        }
    }

    writeln!(out, "Total Dist: {:.2} km", itinerary.total_distance_km)?;
    writeln!(out, "Total Cost: {:.2} Tk", itinerary.total_cost)?;
    if let Some(arrival) = itinerary.start.and(itinerary.arrival()) {
        writeln!(out, "Arrival: {}", ClockTime(arrival))?;
    }
    writeln!(out)
}

fn label(network: &TransitNetwork, node: NodeId) -> &str {
    network.name(node).unwrap_or(UNNAMED_NODE)
}
