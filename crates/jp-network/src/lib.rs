//! `jp-network`: the multimodal graph, spatial indexing, and dataset loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`network`] | `TransitNetwork` (CSR + R-tree), `EdgeRef`               |
//! | [`builder`] | `NetworkBuilder` (coordinate dedup, reciprocal links)    |
//! | [`loader`]  | road / route CSV loaders, `DatasetPaths`, `load_dataset` |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                       |
//!
//! The network is built once and is read-only afterwards; searches borrow it
//! immutably, so one instance can serve any number of concurrent queries.

pub mod builder;
pub mod error;
pub mod loader;
pub mod network;

#[cfg(test)]
mod tests;

pub use builder::{NetworkBuilder, STATION_LINK_MAX_KM};
pub use error::{NetworkError, NetworkResult};
pub use loader::{load_dataset, load_roads_reader, load_routes_reader, DatasetPaths};
pub use network::{EdgeRef, TransitNetwork};
