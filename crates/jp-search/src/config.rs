//! Per-query configuration: objectives, speeds, and validation.
//!
//! Rates are plain `ModeTable<f64>` values in currency per kilometre.
//! Speeds get a newtype because walking is pinned to its own constant
//! rather than following the vehicle speed.
//!
//! Validation runs when a search is constructed, so a search value that
//! exists is always safe to run: every weight it can produce is finite and
//! non-negative.

use jp_core::{Mode, ModeSet, ModeTable, NodeId};
use jp_network::TransitNetwork;

use crate::{SearchError, SearchResult};

/// Pedestrian speed used by every query, in km/h.
pub const WALKING_SPEED_KMH: f64 = 2.0;

// ── Objectives ────────────────────────────────────────────────────────────────

/// What [`StandardSearch`](crate::StandardSearch) minimises.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Objective {
    /// Sum of edge lengths (km).
    Distance,
    /// Sum of `length × rate[mode]`.
    Cost,
}

/// What [`TimeDependentSearch`](crate::TimeDependentSearch) minimises.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimedObjective {
    /// Accumulated monetary cost; clock time is carried along for waits.
    Cost,
    /// Elapsed time since departure, waits included.
    Time,
}

// ── Speeds ────────────────────────────────────────────────────────────────────

/// Travel speed per mode, in km/h.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Speeds(ModeTable<f64>);

impl Speeds {
    /// `kmh` for every vehicle mode; walking stays at [`WALKING_SPEED_KMH`].
    pub fn uniform(kmh: f64) -> Self {
        Self(ModeTable::splat(kmh).with(Mode::Walking, WALKING_SPEED_KMH))
    }

    /// Use `table` verbatim, walking entry included.
    pub fn from_table(table: ModeTable<f64>) -> Self {
        Self(table)
    }

    /// Builder-style override of one mode's speed.
    pub fn with(self, mode: Mode, kmh: f64) -> Self {
        Self(self.0.with(mode, kmh))
    }

    #[inline]
    pub fn kmh(&self, mode: Mode) -> f64 {
        self.0[mode]
    }

    pub fn table(&self) -> &ModeTable<f64> {
        &self.0
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

pub(crate) fn check_modes(modes: ModeSet) -> SearchResult<()> {
    if modes.is_empty() {
        return Err(SearchError::InvalidConfiguration("no travel mode is allowed".into()));
    }
    Ok(())
}

/// Every rate must be finite and non-negative, allowed or not.
pub(crate) fn check_rates(rates: &ModeTable<f64>) -> SearchResult<()> {
    for (mode, &rate) in rates.iter() {
        if !rate.is_finite() || rate < 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "rate for {mode} must be a non-negative number, got {rate}"
            )));
        }
    }
    Ok(())
}

/// Speeds of allowed modes must be finite and positive; no speed may be
/// negative.
pub(crate) fn check_speeds(speeds: &Speeds, modes: ModeSet) -> SearchResult<()> {
    for (mode, &kmh) in speeds.table().iter() {
        let usable = kmh.is_finite() && kmh > 0.0;
        if kmh < 0.0 || (modes.contains(mode) && !usable) {
            return Err(SearchError::InvalidConfiguration(format!(
                "speed for {mode} must be a positive number, got {kmh}"
            )));
        }
    }
    Ok(())
}

pub(crate) fn check_clock(what: &str, hours: f64) -> SearchResult<()> {
    if !hours.is_finite() {
        return Err(SearchError::InvalidConfiguration(format!("{what} must be finite, got {hours}")));
    }
    Ok(())
}

/// Both endpoints must be ids of `network`.
pub(crate) fn check_endpoints(network: &TransitNetwork, from: NodeId, to: NodeId) -> SearchResult<()> {
    for node in [from, to] {
        if !network.contains(node) {
            return Err(SearchError::InvalidNode(node));
        }
    }
    Ok(())
}
