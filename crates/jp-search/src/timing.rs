//! Wait-then-ride timing of a single edge.
//!
//! Both schedule-aware searches and itinerary replay go through
//! [`time_edge`], so a replayed path reproduces the search's clock exactly.

use jp_core::Mode;
use jp_schedule::Timetable;

use crate::Speeds;

/// Time spent on one edge departing at some clock time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeTiming {
    /// Hours spent waiting for the next departure.
    pub wait_h:   f64,
    /// Hours spent moving.
    pub travel_h: f64,
}

impl EdgeTiming {
    #[inline]
    pub fn total_h(&self) -> f64 {
        self.wait_h + self.travel_h
    }
}

/// Timing of a `length_km` edge of `mode` reached at clock time `now`.
///
/// Returns `None` when the mode's service has ended (or never runs), i.e.
/// the edge cannot be taken from this state.
#[inline]
pub fn time_edge(
    timetable: &Timetable,
    speeds: &Speeds,
    mode: Mode,
    length_km: f64,
    now: f64,
) -> Option<EdgeTiming> {
    let wait_h = timetable.waiting_time(now, mode).hours()?;
    let travel_h = length_km / speeds.kmh(mode);
    Some(EdgeTiming { wait_h, travel_h })
}
