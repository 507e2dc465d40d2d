//! Travel modes and the small fixed-size containers keyed by them.
//!
//! The mode set is closed, so per-mode configuration (cost rates, speeds)
//! lives in a flat array rather than a map.  Lookups are a single index.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use crate::CoreError;

// ── Mode ──────────────────────────────────────────────────────────────────────

/// The means of travel along an edge.
///
/// Governs the edge's cost rate, speed, and whether a timetable applies.
/// `Road` and `Walking` are unscheduled and never incur a wait.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Private car on the street network.
    Road,
    /// Metro rail.
    Metro,
    /// First bus line (Bikolpo).
    BusLineA,
    /// Second bus line (Uttara).
    BusLineB,
    /// On foot; used for station ↔ street transfers.
    Walking,
}

impl Mode {
    pub const COUNT: usize = 5;

    /// Every mode, in declaration order.
    pub const ALL: [Mode; Mode::COUNT] =
        [Mode::Road, Mode::Metro, Mode::BusLineA, Mode::BusLineB, Mode::Walking];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for modes that run to a periodic timetable.
    #[inline]
    pub fn is_scheduled(self) -> bool {
        !matches!(self, Mode::Road | Mode::Walking)
    }

    /// Machine-friendly label, used in CSV files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Road     => "road",
            Mode::Metro    => "metro",
            Mode::BusLineA => "bus_a",
            Mode::BusLineB => "bus_b",
            Mode::Walking  => "walking",
        }
    }

    /// Human-readable name for itineraries.
    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Road     => "Car",
            Mode::Metro    => "Metro",
            Mode::BusLineA => "Bikolpo Bus",
            Mode::BusLineB => "Uttara Bus",
            Mode::Walking  => "Walk",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "road" | "car"               => Ok(Mode::Road),
            "metro"                      => Ok(Mode::Metro),
            "bus_a" | "bikolpo"          => Ok(Mode::BusLineA),
            "bus_b" | "uttara"           => Ok(Mode::BusLineB),
            "walking" | "walk"           => Ok(Mode::Walking),
            other => Err(CoreError::UnknownMode(other.to_owned())),
        }
    }
}

// ── ModeTable ─────────────────────────────────────────────────────────────────

/// One value per [`Mode`], indexable by mode.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeTable<T>([T; Mode::COUNT]);

impl<T: Copy> ModeTable<T> {
    /// Same value for every mode.
    pub fn splat(value: T) -> Self {
        Self([value; Mode::COUNT])
    }

    /// Builder-style override of a single entry.
    pub fn with(mut self, mode: Mode, value: T) -> Self {
        self.0[mode.index()] = value;
        self
    }
}

impl<T> ModeTable<T> {
    pub fn from_fn(mut f: impl FnMut(Mode) -> T) -> Self {
        Self(Mode::ALL.map(&mut f))
    }

    /// `(mode, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &T)> + '_ {
        Mode::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Mode> for ModeTable<T> {
    type Output = T;
    #[inline(always)]
    fn index(&self, mode: Mode) -> &T {
        &self.0[mode.index()]
    }
}

impl<T> IndexMut<Mode> for ModeTable<T> {
    #[inline(always)]
    fn index_mut(&mut self, mode: Mode) -> &mut T {
        &mut self.0[mode.index()]
    }
}

impl<T: Default + Copy> Default for ModeTable<T> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

// ── ModeSet ───────────────────────────────────────────────────────────────────

/// A set of modes, stored as a bitmask.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeSet(u8);

impl ModeSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self((1 << Mode::COUNT) - 1)
    }

    pub fn of(modes: &[Mode]) -> Self {
        modes.iter().copied().collect()
    }

    pub fn with(self, mode: Mode) -> Self {
        Self(self.0 | 1 << mode.index())
    }

    pub fn without(self, mode: Mode) -> Self {
        Self(self.0 & !(1 << mode.index()))
    }

    #[inline(always)]
    pub fn contains(self, mode: Mode) -> bool {
        self.0 & (1 << mode.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Mode> {
        Mode::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<Mode> for ModeSet {
    fn from_iter<I: IntoIterator<Item = Mode>>(iter: I) -> Self {
        iter.into_iter().fold(ModeSet::empty(), ModeSet::with)
    }
}

impl fmt::Debug for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
