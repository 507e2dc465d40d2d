//! `jp-output`: presenting search results.
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`itinerary`] | `Itinerary`, `Leg`: a path replayed leg by leg          |
//! | [`writer`]    | `SolutionWriter` trait, `Solution` (one answered query) |
//! | [`text`]      | `TextReport`: human-readable description                |
//! | [`kml`]       | `KmlWriter`: one `solution_pN.kml` per query            |
//! | [`csv`]       | `LegCsvWriter`: every leg of every query in `legs.csv`  |
//! | [`error`]     | `OutputError`, `OutputResult<T>`                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use jp_output::{Itinerary, KmlWriter, Solution, SolutionWriter, TextReport};
//!
//! let itinerary = Itinerary::replay(&net, &path, &rates, &speeds, &timetable, start)?;
//! let solution = Solution { id: 4, title: "Cheapest with start time", network: &net, itinerary: &itinerary };
//! TextReport::stdout().write(&solution)?;
//! KmlWriter::new(out_dir).write(&solution)?;
//! ```

pub mod csv;
pub mod error;
pub mod itinerary;
pub mod kml;
pub mod text;
pub mod writer;


pub use csv::LegCsvWriter;
pub use error::{OutputError, OutputResult};
pub use itinerary::{Itinerary, Leg, LegTiming};
pub use kml::{write_kml, KmlWriter, DEFAULT_PALETTE};
pub use text::{write_description, TextReport};
pub use writer::{Solution, SolutionWriter};
