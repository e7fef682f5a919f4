//! Overlap command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::common::load_polygons;

/// Execute the overlap command: prints `true` or `false`.
pub fn cmd_overlap(a_path: &Path, b_path: &Path) -> Result<()> {
    let a = load_polygons(a_path)?
        .into_iter()
        .next()
        .with_context(|| format!("{} holds no polygons", a_path.display()))?;
    let b = load_polygons(b_path)?
        .into_iter()
        .next()
        .with_context(|| format!("{} holds no polygons", b_path.display()))?;

    let overlapping = a.is_overlapping(&b);
    info!(overlapping, area_a = a.area(), area_b = b.area(), "overlap test");

    println!("{overlapping}");
    Ok(())
}
