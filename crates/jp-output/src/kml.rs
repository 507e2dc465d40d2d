//! KML export of a journey as one styled `LineString`.
//!
//! Coordinates are `lon,lat,0` with six decimals, one point per line, the
//! concatenated geometry of every leg.  Colours are KML `aabbggrr` hex.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use jp_network::TransitNetwork;

use crate::{Itinerary, OutputResult, Solution, SolutionWriter};

/// Line colours for queries 1, 2, 3, … (wrapping).
pub const DEFAULT_PALETTE: [&str; 6] = [
    "ff0000ff", // red
    "ffff0000", // blue
    "ff00ff00", // green
    "ff00ffff", // yellow
    "ff800080", // purple
    "ff0080ff", // orange
];

/// Writes `solution_p{id}.kml` into a directory.
pub struct KmlWriter {
    dir:     PathBuf,
    palette: Vec<String>,
}

impl KmlWriter {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Replace the colour list.  An empty list keeps the default.
    pub fn with_palette(mut self, colors: &[&str]) -> Self {
        if !colors.is_empty() {
            self.palette = colors.iter().map(|c| c.to_string()).collect();
        }
        self
    }

    /// File that query `id` is written to.
    pub fn path_for(&self, id: u32) -> PathBuf {
        self.dir.join(format!("solution_p{id}.kml"))
    }

    fn color_for(&self, id: u32) -> &str {
        let slot = (id.max(1) - 1) as usize % self.palette.len();
        &self.palette[slot]
    }
}

impl SolutionWriter for KmlWriter {
    fn write(&mut self, solution: &Solution<'_>) -> OutputResult<()> {
        let path = self.path_for(solution.id);
        let mut out = BufWriter::new(File::create(&path)?);
        write_kml(&mut out, solution.network, solution.itinerary, solution.title, self.color_for(solution.id))?;
        out.flush()?;
        info!(file = %path.display(), legs = solution.itinerary.legs.len(), "exported KML");
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

/// Write `itinerary` as a KML document named `name` drawn in `color`.
pub fn write_kml<W: Write>(
    out: &mut W,
    network: &TransitNetwork,
    itinerary: &Itinerary,
    name: &str,
    color: &str,
) -> std::io::Result<()> {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(out, r#"<kml xmlns="http://earth.google.com/kml/2.1">"#)?;
    writeln!(out, "<Document>")?;
    writeln!(
        out,
        r#"<Style id="p"><LineStyle><color>{}</color><width>4</width></LineStyle></Style>"#,
        escape(color),
    )?;
    writeln!(
        out,
        "<Placemark><name>{}</name><styleUrl>#p</styleUrl><LineString><tessellate>1</tessellate><coordinates>",
        escape(name),
    )?;
    for p in itinerary.geometry(network) {
        writeln!(out, "{:.6},{:.6},0", p.lon, p.lat)?;
    }
    writeln!(out, "</coordinates></LineString></Placemark></Document></kml>")
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            _ => s.push(c),
        }
    }
    s
}
