//! `jp-schedule`: periodic transit timetables and the waiting-time model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                      |
//! |---------------|-----------------------------------------------|
//! | [`timetable`] | `Schedule`, `Timetable`, `Wait`               |
//! | [`loader`]    | `load_timetable_csv`, `load_timetable_reader` |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`          |
//!
//! # Headway model (summary)
//!
//! Every scheduled mode departs at `start + k·headway` for `k = 0, 1, …`
//! up to `end` (hours of day).  A traveller reaching a stop at time `t`:
//!
//! ```text
//! t < start          → wait start − t
//! t > end            → Unreachable (no departure remains today)
//! otherwise          → wait until the next grid point ≥ t (0 if on it)
//! ```
//!
//! `Road` and `Walking` never wait.

pub mod error;
pub mod loader;
pub mod timetable;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_timetable_csv, load_timetable_reader};
pub use timetable::{Schedule, Timetable, Wait};
