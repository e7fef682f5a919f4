//! Hull command implementation.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use ringclip::{StitchStats, outer_hull};

use super::common::{OutputArgs, OutputFormat, emit, load_polygons};

/// Execute the hull command.
pub fn cmd_hull(input: &Path, args: &OutputArgs) -> Result<()> {
    let polygons = load_polygons(input)?;
    let input_rings: usize = polygons.iter().map(|p| p.rings.len()).sum();

    let start = Instant::now();
    let mut hull = outer_hull(&polygons);
    hull.optimize_with(&args.stitch_config());

    let stats = StitchStats::from_rings(input_rings, &hull.rings);
    info!(
        polygons = polygons.len(),
        input_rings = stats.input_rings,
        output_rings = stats.output_rings,
        max_ring_length = stats.max_ring_length,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "hull"
    );

    emit(std::slice::from_ref(&hull), args, OutputFormat::Svg)
}
