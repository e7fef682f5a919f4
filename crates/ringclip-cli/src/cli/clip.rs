//! Clip command implementation.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use ringclip::{Keep, Polygon, StitchConfig, StitchStats};

use super::common::{OutputArgs, OutputFormat, emit, load_polygons};

/// Execute the clip command.
///
/// All boundary polygons are concatenated into one multi-ring boundary, and
/// each subject polygon is clipped against it separately.
pub fn cmd_clip(subject_path: &Path, boundary_path: &Path, outside: bool, args: &OutputArgs) -> Result<()> {
    let subjects = load_polygons(subject_path)?;
    let boundary = Polygon::from_rings(load_polygons(boundary_path)?.into_iter().flat_map(|p| p.rings).collect());
    let keep = if outside { Keep::Outside } else { Keep::Inside };

    info!(
        subjects = subjects.len(),
        boundary_rings = boundary.rings.len(),
        ?keep,
        "clipping"
    );

    let config = args.stitch_config();
    let results = clip_all(&subjects, &boundary, keep, &config);

    emit(&results, args, OutputFormat::Svg)
}

/// Clip each subject, restitch with the requested tolerance and log stats.
pub fn clip_all(
    subjects: &[Polygon],
    boundary: &Polygon,
    keep: Keep,
    config: &StitchConfig,
) -> Vec<Polygon> {
    subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            let mut clipped = subject.clip_to(boundary, keep);
            let fragments = clipped.rings.len();
            clipped.optimize_with(config);

            let stats = StitchStats::from_rings(fragments, &clipped.rings);
            info!(
                polygon = i,
                input_rings = stats.input_rings,
                output_rings = stats.output_rings,
                max_ring_length = stats.max_ring_length,
                reduction_pct = stats.reduction_ratio * 100.0,
                "clipped"
            );
            clipped
        })
        .collect()
}
