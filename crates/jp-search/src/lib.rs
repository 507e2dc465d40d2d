//! `jp-search`: path search over a [`TransitNetwork`](jp_network::TransitNetwork).
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`search`]      | `PathSearch` trait                                     |
//! | [`standard`]    | `StandardSearch`: Dijkstra on distance or cost         |
//! | [`timed`]       | `TimeDependentSearch`: Dijkstra threading clock time   |
//! | [`constrained`] | `DeadlineSearch`: cheapest arrival before a deadline   |
//! | [`path`]        | `SolutionPath`, shared backtracking                    |
//! | [`config`]      | objectives, `Speeds`, rate / speed validation          |
//! | [`timing`]      | `EdgeTiming`, the wait + ride model shared by searches |
//! | [`error`]       | `SearchError`, `SearchResult<T>`                       |
//!
//! Every search borrows the network immutably and keeps its queue, labels,
//! and predecessor tables local to one call; independent queries can run
//! concurrently on a shared network.
//!
//! "No path" is not an error: it is an empty [`SolutionPath`]
//! ([`SolutionPath::is_found`] returns `false`).

pub mod config;
pub mod constrained;
pub mod error;
pub mod path;
pub mod search;
pub mod standard;
pub mod timed;
pub mod timing;

mod state;


pub use config::{Objective, Speeds, TimedObjective, WALKING_SPEED_KMH};
pub use constrained::DeadlineSearch;
pub use error::{SearchError, SearchResult};
pub use path::SolutionPath;
pub use search::PathSearch;
pub use standard::StandardSearch;
pub use timed::TimeDependentSearch;
pub use timing::{time_edge, EdgeTiming};
