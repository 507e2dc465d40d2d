//! CSV timetable loader.
//!
//! # CSV format
//!
//! One row per scheduled mode.  Times are 24-hour `HH:MM`; the headway is in
//! minutes.
//!
//! ```csv
//! mode,first_departure,last_departure,headway_min
//! metro,01:00,23:00,5
//! bus_a,07:00,22:00,20
//! bus_b,06:00,23:00,10
//! ```
//!
//! Scheduled modes absent from the file have no service.  Rows for `road`
//! or `walking` are rejected: those modes never follow a timetable.  A mode
//! listed twice keeps its last row.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use jp_core::{ClockTime, Mode};

use crate::timetable::{Schedule, Timetable};
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TimetableRecord {
    mode:            String,
    first_departure: String,
    last_departure:  String,
    headway_min:     f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Timetable`] from a CSV file.
pub fn load_timetable_csv(path: &Path) -> Result<Timetable, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_timetable_reader(file)
}

/// Like [`load_timetable_csv`] but accepts any `Read` source.
pub fn load_timetable_reader<R: Read>(reader: R) -> Result<Timetable, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut timetable = Timetable::empty();

    for result in csv_reader.deserialize::<TimetableRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;

        let mode: Mode = row
            .mode
            .parse()
            .map_err(|e: jp_core::CoreError| ScheduleError::Parse(e.to_string()))?;
        if !mode.is_scheduled() {
            return Err(ScheduleError::Parse(format!(
                "mode {mode} does not run to a timetable"
            )));
        }

        let start = parse_clock(&row.first_departure)?;
        let end = parse_clock(&row.last_departure)?;
        let schedule = Schedule::every_minutes(start, end, row.headway_min)?;
        timetable = timetable.with(mode, schedule);
    }

    Ok(timetable)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_clock(s: &str) -> Result<f64, ScheduleError> {
    s.parse::<ClockTime>()
        .map(ClockTime::hours)
        .map_err(|e| ScheduleError::Parse(e.to_string()))
}
