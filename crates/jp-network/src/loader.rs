//! CSV loaders for the Dhaka road and transit dataset.
//!
//! # Road file
//!
//! Headerless, variable-width rows.  Only rows whose first field starts with
//! `DhakaStreet` are used:
//!
//! ```text
//! DhakaStreet…, lon, lat, lon, lat, …, [<unused>,] distance_km
//! ```
//!
//! Coordinates are read in pairs up to the distance field; an odd field
//! left over before it is the unused column and is dropped.  The first and
//! last points become (deduplicated) nodes joined by one `Road` link
//! carrying the row's stated distance.
//!
//! # Route files
//!
//! ```text
//! <tag>, lon, lat, lon, lat, …, start_station, end_station
//! ```
//!
//! Metro files accept the tag `DhakaMetroRail`; bus files accept any tag
//! containing `DhakaBus`.  The end points become named station nodes and the
//! link length is the haversine length of the polyline.
//!
//! Rows too short to carry two points are skipped.  A field that should be a
//! number but is not aborts the load with [`NetworkError::Parse`].

use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use jp_core::{polyline_length_km, GeoPoint, Mode};

use crate::builder::{NetworkBuilder, STATION_LINK_MAX_KM};
use crate::network::TransitNetwork;
use crate::{NetworkError, NetworkResult};

const ROAD_TAG_PREFIX: &str = "DhakaStreet";
const METRO_TAG:       &str = "DhakaMetroRail";
const BUS_TAG_PART:    &str = "DhakaBus";

// ── Dataset bundle ────────────────────────────────────────────────────────────

/// Locations of the four dataset files.
#[derive(Clone, Debug)]
pub struct DatasetPaths {
    pub roads:    PathBuf,
    pub metro:    PathBuf,
    pub bus_a:    PathBuf,
    pub bus_b:    PathBuf,
}

impl DatasetPaths {
    /// The conventional file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            roads: dir.join("Roadmap-Dhaka.csv"),
            metro: dir.join("Routemap-DhakaMetroRail.csv"),
            bus_a: dir.join("Routemap-BikolpoBus.csv"),
            bus_b: dir.join("Routemap-UttaraBus.csv"),
        }
    }
}

/// Load every dataset file, link stations to the street network, and build.
pub fn load_dataset(paths: &DatasetPaths) -> NetworkResult<TransitNetwork> {
    let mut builder = NetworkBuilder::new();

    let roads = load_roads_reader(&mut builder, std::fs::File::open(&paths.roads)?)?;
    info!(nodes = builder.node_count(), links = roads, "loaded road map");

    for (path, mode) in [
        (&paths.metro, Mode::Metro),
        (&paths.bus_a, Mode::BusLineA),
        (&paths.bus_b, Mode::BusLineB),
    ] {
        let links = load_routes_reader(&mut builder, std::fs::File::open(path)?, mode)?;
        info!(%mode, links, file = %path.display(), "loaded route map");
    }

    let linked = builder.link_stations(STATION_LINK_MAX_KM);
    info!(stations = linked, "linked stations to road network");

    Ok(builder.build())
}

// ── Road file ─────────────────────────────────────────────────────────────────

/// Read road rows into `builder`.  Returns the number of links added.
pub fn load_roads_reader<R: Read>(builder: &mut NetworkBuilder, reader: R) -> NetworkResult<usize> {
    let mut links = 0;

    for result in csv_reader(reader).records() {
        let record = result?;
        let line = line_of(&record);
        let n = record.len();

        if !record.get(0).is_some_and(|tag| tag.starts_with(ROAD_TAG_PREFIX)) || n < 6 {
            continue;
        }

        let length_km = parse_f64(&record[n - 1], line)?;
        let polyline = parse_polyline(&record, 1..n - 1, line)?;
        if polyline.len() < 2 {
            debug!(line, "skipping road row with fewer than two points");
            continue;
        }

        let u = builder.node_at(polyline[0]);
        let v = builder.node_at(polyline[polyline.len() - 1]);
        builder.add_link(u, v, length_km, Mode::Road, polyline);
        links += 1;
    }

    Ok(links)
}

// ── Route files ───────────────────────────────────────────────────────────────

/// Read transit route rows of `mode` into `builder`.  Returns the number of
/// links added.
pub fn load_routes_reader<R: Read>(
    builder: &mut NetworkBuilder,
    reader: R,
    mode: Mode,
) -> NetworkResult<usize> {
    let accepts: fn(&str) -> bool = match mode {
        Mode::Metro => |tag: &str| tag == METRO_TAG,
        Mode::BusLineA | Mode::BusLineB => |tag: &str| tag.contains(BUS_TAG_PART),
        other => return Err(NetworkError::UnsupportedMode(other)),
    };
    let mut links = 0;

    for result in csv_reader(reader).records() {
        let record = result?;
        let line = line_of(&record);
        let n = record.len();

        if n < 3 || !accepts(&record[0]) {
            continue;
        }

        let polyline = parse_polyline(&record, 1..n - 2, line)?;
        if polyline.len() < 2 {
            debug!(line, %mode, "skipping route row with fewer than two points");
            continue;
        }

        let u = builder.node_at(polyline[0]);
        builder.name_station(u, &record[n - 2]);
        let v = builder.node_at(polyline[polyline.len() - 1]);
        builder.name_station(v, &record[n - 1]);

        let length_km = polyline_length_km(&polyline);
        builder.add_link(u, v, length_km, mode, polyline);
        links += 1;
    }

    Ok(links)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}

fn parse_f64(field: &str, line: u64) -> NetworkResult<f64> {
    field.parse::<f64>().map_err(|_| NetworkError::Parse {
        line,
        message: format!("expected a number, found {field:?}"),
    })
}

/// Parse `lon, lat` pairs from `fields`; a trailing unpaired field is ignored.
fn parse_polyline(
    record: &StringRecord,
    fields: std::ops::Range<usize>,
    line: u64,
) -> NetworkResult<Vec<GeoPoint>> {
    let coords: Vec<&str> = fields.map(|i| &record[i]).collect();
    coords
        .chunks_exact(2)
        .map(|pair| {
            let lon = parse_f64(pair[0], line)?;
            let lat = parse_f64(pair[1], line)?;
            Ok(GeoPoint::new(lat, lon))
        })
        .collect()
}
