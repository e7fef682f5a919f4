//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, ValueEnum};
use serde::Serialize;
use serde_json::Value;

use ringclip::{EPSILON, Polygon, StitchConfig, polygon_from_value, svg_document};

/// Output format for resulting polygons.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Json,
}

/// Output options shared by every command that writes polygons.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output format (svg for clip/hull, json for import when not given)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for coordinates in SVG output
    #[arg(long, default_value_t = 2)]
    pub precision: usize,

    /// Endpoint tolerance when stitching result rings
    #[arg(long, default_value_t = EPSILON)]
    pub epsilon: f64,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl OutputArgs {
    pub fn stitch_config(&self) -> StitchConfig {
        StitchConfig::with_epsilon(self.epsilon)
    }
}

/// JSON document shape for both input and output.
#[derive(Serialize)]
struct PolygonDocument<'a> {
    polygons: &'a [Polygon],
}

/// Read a `{"polygons": [...]}` file.
pub fn load_polygons(path: &Path) -> Result<Vec<Polygon>> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let doc: Value = serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))?;

    let Some(items) = doc.get("polygons").and_then(Value::as_array) else {
        bail!("{}: expected an object with a \"polygons\" array", path.display());
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| polygon_from_value(item).with_context(|| format!("{}: polygon {i}", path.display())))
        .collect()
}

/// Render polygons in the requested format.
pub fn render(polygons: &[Polygon], format: OutputFormat, precision: usize) -> Result<String> {
    Ok(match format {
        OutputFormat::Svg => svg_document(polygons, precision),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&PolygonDocument { polygons })?;
            json.push('\n');
            json
        }
    })
}

/// Write rendered output to the `-o` file or stdout.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content).with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// Render and write in one go.
pub fn emit(polygons: &[Polygon], args: &OutputArgs, default_format: OutputFormat) -> Result<()> {
    let content = render(polygons, args.format.unwrap_or(default_format), args.precision)?;
    write_output(&content, args.output.as_deref())
}
