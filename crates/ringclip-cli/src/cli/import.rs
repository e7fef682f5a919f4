//! Import command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use ringclip::extract_polygons_from_svg;

use super::common::{OutputArgs, OutputFormat, emit};

/// Execute the import command: SVG paths to polygon JSON.
pub fn cmd_import(svg_path: &Path, args: &OutputArgs) -> Result<()> {
    let svg = fs::read_to_string(svg_path).with_context(|| format!("failed to read {}", svg_path.display()))?;
    let polygons = extract_polygons_from_svg(&svg).with_context(|| format!("failed to import {}", svg_path.display()))?;

    info!(
        polygons = polygons.len(),
        rings = polygons.iter().map(|p| p.rings.len()).sum::<usize>(),
        "imported"
    );

    emit(&polygons, args, OutputFormat::Json)
}
