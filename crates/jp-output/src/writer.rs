//! The `SolutionWriter` trait implemented by every output format.

use jp_network::TransitNetwork;

use crate::{Itinerary, OutputResult};

/// One answered query, ready to be written.
#[derive(Copy, Clone)]
pub struct Solution<'a> {
    /// Query number; also selects the file name and colour of KML output.
    pub id:        u32,
    pub title:     &'a str,
    pub network:   &'a TransitNetwork,
    pub itinerary: &'a Itinerary,
}

/// Trait implemented by the text, KML, and CSV writers.
pub trait SolutionWriter {
    /// Write one solution.
    fn write(&mut self, solution: &Solution<'_>) -> OutputResult<()>;

    /// Flush and close underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
