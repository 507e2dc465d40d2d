//! CSV output of itinerary legs.
//!
//! One row per leg, every query in the same file:
//!
//! ```text
//! query,seq,mode,from_node,to_node,from_name,to_name,distance_km,cost,depart,wait_min,arrive
//! ```
//!
//! Clock columns are `HH:MM` (24-hour) and empty for untimed itineraries.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use jp_core::ClockTime;

use crate::{OutputResult, Solution, SolutionWriter};

const HEADER: [&str; 12] = [
    "query", "seq", "mode", "from_node", "to_node", "from_name", "to_name",
    "distance_km", "cost", "depart", "wait_min", "arrive",
];

/// Writes legs of every solution to one CSV stream.
pub struct LegCsvWriter<W: Write> {
    legs:     Writer<W>,
    finished: bool,
}

impl LegCsvWriter<File> {
    /// Create `legs.csv` in `dir` and write the header row.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(dir.join("legs.csv"))?)
    }
}

impl<W: Write> LegCsvWriter<W> {
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut legs = Writer::from_writer(out);
        legs.write_record(HEADER)?;
        Ok(Self { legs, finished: false })
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.legs.flush()?;
        self.legs.into_inner().map_err(|e| e.into_error().into())
    }
}

impl<W: Write> SolutionWriter for LegCsvWriter<W> {
    fn write(&mut self, solution: &Solution<'_>) -> OutputResult<()> {
        let net = solution.network;
        for (seq, leg) in solution.itinerary.legs.iter().enumerate() {
            let (depart, wait, arrive) = match leg.timing {
                Some(t) => (
                    hhmm(t.depart),
                    format!("{:.1}", t.wait_h * 60.0),
                    hhmm(t.arrive),
                ),
                None => (String::new(), String::new(), String::new()),
            };
            self.legs.write_record(&[
                solution.id.to_string(),
                seq.to_string(),
                leg.mode.as_str().to_owned(),
                leg.from.0.to_string(),
                leg.to.0.to_string(),
                net.name(leg.from).unwrap_or_default().to_owned(),
                net.name(leg.to).unwrap_or_default().to_owned(),
                format!("{:.3}", leg.length_km),
                format!("{:.2}", leg.cost),
                depart,
                wait,
                arrive,
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.legs.flush()?;
        Ok(())
    }
}

/// 24-hour `HH:MM`; times past midnight keep counting (`24:10`).
fn hhmm(hours: f64) -> String {
    let minutes = ClockTime(hours).total_minutes();
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
