//! Clock time of day.
//!
//! All scheduling arithmetic in the planner works in fractional **hours**
//! since midnight (`17.75` = 5:45 PM).  `ClockTime` wraps that value for
//! parsing and display; search code uses the raw `f64`.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A time of day in fractional hours since midnight.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(pub f64);

impl ClockTime {
    pub fn from_hm(hours: u32, minutes: u32) -> Self {
        Self(hours as f64 + minutes as f64 / 60.0)
    }

    #[inline]
    pub fn hours(self) -> f64 {
        self.0
    }

    /// Whole minutes since midnight, rounded to the nearest minute.
    pub fn total_minutes(self) -> i64 {
        (self.0 * 60.0).round() as i64
    }
}

impl From<f64> for ClockTime {
    fn from(hours: f64) -> Self {
        Self(hours)
    }
}

/// 12-hour display: `5:43 PM`, `12:05 AM`.  Times past midnight wrap.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.total_minutes().rem_euclid(24 * 60);
        let (hr24, mn) = (minutes / 60, minutes % 60);
        let suffix = if hr24 >= 12 { "PM" } else { "AM" };
        let hr12 = match hr24 % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{hr12}:{mn:02} {suffix}")
    }
}

/// Parses 24-hour `HH:MM`.
impl FromStr for ClockTime {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CoreError::InvalidClockTime(s.to_owned());
        let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
        let h: u32 = h.parse().map_err(|_| bad())?;
        let m: u32 = m.parse().map_err(|_| bad())?;
        if h > 23 || m > 59 {
            return Err(bad());
        }
        Ok(Self::from_hm(h, m))
    }
}
