//! # ringclip
//!
//! Planar geometry with multi-ring polygons and a clipping kernel: segment
//! intersection, point containment, segment and polygon clipping, ring
//! stitching, and a heuristic outer-hull union.
//!
//! ## Rust Lesson #1: Modules
//!
//! Every module must be declared explicitly:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod chain;
pub mod clip;
pub mod contain;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod ingest;
pub mod polygon;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use chain::{StitchConfig, StitchStats, stitch_rings};
pub use clip::{Keep, OVERLAP_EPSILON, clip_line, clip_to, is_overlapping};
pub use contain::{is_point_in_polygon, is_point_in_ring, is_point_on_segment};
pub use draw::{DrawSurface, SvgPathBuilder};
pub use error::GeometryError;
pub use geometry::{BoundingBox, EPSILON, Line, Point, Ring};
pub use hull::outer_hull;
pub use ingest::{PointInput, polygon_from_value, ring_from_value};
pub use polygon::Polygon;
pub use svg::{SvgError, ToSvg, extract_polygons_from_svg, svg_document};
