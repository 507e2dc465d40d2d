//! journey: plans a trip across Dhaka by car, metro, bus, and on foot.
//!
//! Loads the road and route maps, snaps origin and destination to the
//! nearest network nodes, and answers the six canonical queries (see
//! [`scenarios`]).  Each answer is printed and exported as
//! `solution_pN.kml`; `--csv` also writes every leg to `legs.csv`.
//!
//! The walk from the origin to its node delays the start; the walk from the
//! destination node brings the deadline forward.  Both walks are at
//! walking speed.

mod scenarios;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use jp_core::{ClockTime, GeoPoint};
use jp_network::{load_dataset, DatasetPaths};
use jp_output::{KmlWriter, LegCsvWriter, Solution, SolutionWriter, TextReport};
use jp_schedule::load_timetable_csv;
use jp_search::WALKING_SPEED_KMH;

use scenarios::{canonical, Timetables, Window};

#[derive(Parser, Debug)]
#[command(author, version, about = "Multimodal journey planner for the Dhaka road and transit network")]
struct Cli {
    /// Directory holding Roadmap-Dhaka.csv and the three Routemap-*.csv files.
    #[arg(long, default_value = "Dataset")]
    data_dir: PathBuf,

    #[arg(long, default_value_t = 23.834145, allow_negative_numbers = true)]
    from_lat: f64,
    #[arg(long, default_value_t = 90.363833, allow_negative_numbers = true)]
    from_lon: f64,
    #[arg(long, default_value_t = 23.721444, allow_negative_numbers = true)]
    to_lat: f64,
    #[arg(long, default_value_t = 90.378868, allow_negative_numbers = true)]
    to_lon: f64,

    /// Departure from the origin, 24-hour HH:MM.
    #[arg(long, default_value = "17:43")]
    start: ClockTime,

    /// Latest arrival at the destination, 24-hour HH:MM.
    #[arg(long, default_value = "20:40")]
    deadline: ClockTime,

    /// Where KML (and CSV) files are written.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Timetable CSV for the deadline query (default: per-line service).
    #[arg(long)]
    timetable: Option<PathBuf>,

    /// Also write every leg to legs.csv.
    #[arg(long)]
    csv: bool,

    /// Run only these queries (repeatable).  Default: all six.
    #[arg(long = "problem", value_name = "N")]
    problems: Vec<u32>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let network = load_dataset(&DatasetPaths::in_dir(&cli.data_dir))
        .with_context(|| format!("failed to load dataset from {}", cli.data_dir.display()))?;
    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        stations = network.station_count(),
        "network ready",
    );

    let origin = GeoPoint::new(cli.from_lat, cli.from_lon);
    let destination = GeoPoint::new(cli.to_lat, cli.to_lon);
    let (Some(start_node), Some(end_node)) = (network.nearest_node(origin), network.nearest_node(destination)) else {
        bail!("the dataset produced an empty network");
    };

    let walk_src = origin.distance_km(network.pos(start_node));
    let walk_dst = network.pos(end_node).distance_km(destination);
    println!(
        "Initial Walk: {walk_src:.2} km ({} min) to Node {}",
        walk_minutes(walk_src),
        start_node.0,
    );
    println!(
        "Final Walk: {walk_dst:.2} km ({} min) from Node {}",
        walk_minutes(walk_dst),
        end_node.0,
    );

    let window = Window {
        start:    cli.start.hours() + walk_src / WALKING_SPEED_KMH,
        deadline: cli.deadline.hours() - walk_dst / WALKING_SPEED_KMH,
    };
    let mut timetables = Timetables::default();
    if let Some(path) = &cli.timetable {
        timetables.deadline = load_timetable_csv(path)
            .with_context(|| format!("failed to load timetable {}", path.display()))?;
    }

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("failed to create {}", cli.out_dir.display()))?;
    let mut writers: Vec<Box<dyn SolutionWriter>> = Vec::new();
    writers.push(Box::new(TextReport::stdout()));
    writers.push(Box::new(KmlWriter::new(&cli.out_dir)));
    if cli.csv {
        writers.push(Box::new(LegCsvWriter::create(&cli.out_dir)?));
    }

    for scenario in canonical() {
        if !cli.problems.is_empty() && !cli.problems.contains(&scenario.id) {
            continue;
        }
        let itinerary = scenario
            .run(&network, start_node, end_node, window, &timetables)
            .with_context(|| format!("problem {} failed", scenario.id))?;
        let solution = Solution {
            id:        scenario.id,
            title:     scenario.title,
            network:   &network,
            itinerary: &itinerary,
        };
        for writer in &mut writers {
            writer.write(&solution)?;
        }
    }

    for writer in &mut writers {
        writer.finish()?;
    }
    Ok(())
}

/// Whole minutes to walk `km`.
fn walk_minutes(km: f64) -> i64 {
    (km / WALKING_SPEED_KMH * 60.0) as i64
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
