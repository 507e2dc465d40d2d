//! Core timetable types: `Schedule`, `Timetable`, and `Wait`.
//!
//! # Departure grid
//!
//! A `Schedule` is a fixed-headway service running between `start` and `end`
//! (fractional hours of day).  Departures fall on
//!
//! ```text
//! start, start + headway, start + 2·headway, …   (≤ end)
//! ```
//!
//! `Schedule::wait_at` is O(1): it jumps straight to the first grid point at
//! or after the current time with a `ceil` rather than scanning.
//!
//! # Variants
//!
//! A `Timetable` maps each scheduled mode to its `Schedule`.  Callers pick
//! the timetable per query; two presets are provided ([`Timetable::uniform`]
//! and [`Timetable::per_line`]) and arbitrary ones can be loaded from CSV.

use jp_core::{Mode, ModeTable};

use crate::{ScheduleError, ScheduleResult};

/// Two departure instants closer than this are the same instant.
const COINCIDENT_EPS_H: f64 = 1e-9;

// ── Wait ──────────────────────────────────────────────────────────────────────

/// Outcome of asking a timetable how long to wait before boarding.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Wait {
    /// Board after waiting this many hours (0 for immediate departure).
    Hours(f64),
    /// The service has ended for the day; the edge cannot be taken.
    Unreachable,
}

impl Wait {
    /// The wait in hours, or `None` if unreachable.
    #[inline]
    pub fn hours(self) -> Option<f64> {
        match self {
            Wait::Hours(h) => Some(h),
            Wait::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_unreachable(self) -> bool {
        matches!(self, Wait::Unreachable)
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// A periodic service: first departure, last departure, and headway, all in
/// hours of day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    start:   f64,
    end:     f64,
    headway: f64,
}

impl Schedule {
    /// 6:00 AM to 11:00 PM, every 15 minutes.
    pub const DAILY: Schedule = Schedule { start: 6.0, end: 23.0, headway: 0.25 };

    /// Validate and construct.
    ///
    /// Rejects non-finite values, a non-positive headway, and `end < start`.
    pub fn new(start: f64, end: f64, headway: f64) -> ScheduleResult<Self> {
        if !(start.is_finite() && end.is_finite() && headway.is_finite()) {
            return Err(ScheduleError::InvalidSchedule(format!(
                "non-finite value in ({start}, {end}, {headway})"
            )));
        }
        if headway <= 0.0 {
            return Err(ScheduleError::InvalidSchedule(format!(
                "headway must be positive, got {headway}"
            )));
        }
        if end < start {
            return Err(ScheduleError::InvalidSchedule(format!(
                "service ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end, headway })
    }

    /// Convenience constructor taking the headway in minutes.
    pub fn every_minutes(start: f64, end: f64, headway_min: f64) -> ScheduleResult<Self> {
        Self::new(start, end, headway_min / 60.0)
    }

    pub fn start(&self) -> f64 { self.start }
    pub fn end(&self) -> f64 { self.end }
    pub fn headway(&self) -> f64 { self.headway }

    /// How long a traveller standing at the stop at `now` waits to board.
    pub fn wait_at(&self, now: f64) -> Wait {
        if now < self.start {
            return Wait::Hours(self.start - now);
        }
        if now > self.end {
            return Wait::Unreachable;
        }

        let elapsed = now - self.start;
        let mut next = self.start + (elapsed / self.headway).ceil() * self.headway;

        if (next - now).abs() < COINCIDENT_EPS_H {
            return Wait::Hours(0.0);
        }
        // Round-off can land `next` a hair before `now`; the real grid point
        // is one headway later.
        if next < now {
            next += self.headway;
        }
        Wait::Hours((next - now).max(0.0))
    }
}

// ── Timetable ─────────────────────────────────────────────────────────────────

/// Per-mode schedules: the schedule variant chosen for one query.
///
/// A scheduled mode without an entry has no service at all, so every edge of
/// that mode is [`Wait::Unreachable`].  Unscheduled modes (`Road`,
/// `Walking`) never wait regardless of the table contents.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timetable {
    schedules: ModeTable<Option<Schedule>>,
}

impl Timetable {
    /// No transit service at all.
    pub fn empty() -> Self {
        Self { schedules: ModeTable::splat(None) }
    }

    /// The same schedule for every scheduled mode.
    pub fn uniform(schedule: Schedule) -> Self {
        Self {
            schedules: ModeTable::from_fn(|m| m.is_scheduled().then_some(schedule)),
        }
    }

    /// Line-specific service: Metro 1:00–23:00 every 5 min, Bikolpo bus
    /// 7:00–22:00 every 20 min, Uttara bus 6:00–23:00 every 10 min.
    pub fn per_line() -> Self {
        Self::empty()
            .with(Mode::Metro,    Schedule { start: 1.0, end: 23.0, headway: 5.0 / 60.0 })
            .with(Mode::BusLineA, Schedule { start: 7.0, end: 22.0, headway: 20.0 / 60.0 })
            .with(Mode::BusLineB, Schedule { start: 6.0, end: 23.0, headway: 10.0 / 60.0 })
    }

    /// Builder-style: set (or replace) the schedule of one mode.
    ///
    /// Entries for unscheduled modes are stored but never consulted.
    pub fn with(mut self, mode: Mode, schedule: Schedule) -> Self {
        self.schedules[mode] = Some(schedule);
        self
    }

    /// Builder-style: remove service for one mode.
    pub fn without(mut self, mode: Mode) -> Self {
        self.schedules[mode] = None;
        self
    }

    pub fn schedule(&self, mode: Mode) -> Option<&Schedule> {
        self.schedules[mode].as_ref()
    }

    /// Waiting time before an edge of `mode` can be boarded at `now`.
    #[inline]
    pub fn waiting_time(&self, now: f64, mode: Mode) -> Wait {
        if !mode.is_scheduled() {
            return Wait::Hours(0.0);
        }
        match &self.schedules[mode] {
            Some(s) => s.wait_at(now),
            None => Wait::Unreachable,
        }
    }
}

impl Default for Timetable {
    fn default() -> Self {
        Self::uniform(Schedule::DAILY)
    }
}
