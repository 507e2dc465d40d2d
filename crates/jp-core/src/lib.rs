//! `jp-core`: foundational types for the multimodal journey planner.
//!
//! Every other `jp-*` crate depends on this one.  It has no `jp-*`
//! dependencies and a single required external one (`thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`                          |
//! | [`geo`]   | `GeoPoint`, `haversine_km`, polyline length |
//! | [`mode`]  | `Mode`, `ModeTable<T>`, `ModeSet`           |
//! | [`time`]  | `ClockTime` (hours of day, 12-hour display) |
//! | [`error`] | `CoreError`, `CoreResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types. |

pub mod error;
pub mod geo;
pub mod ids;
pub mod mode;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, haversine_km, polyline_length_km};
pub use ids::{EdgeId, NodeId};
pub use mode::{Mode, ModeSet, ModeTable};
pub use time::ClockTime;
