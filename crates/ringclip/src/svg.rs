//! SVG in and out.
//!
//! Import uses usvg for complete SVG resolution (CSS, shapes to paths, etc.)
//! then walks the tree to turn every path element into a polygon.
//! Export writes `<polyline>` elements, one per ring.
//!
//! ## Curve Flattening
//!
//! SVG paths contain Bézier curves (cubic and quadratic). These must be
//! "flattened" into line segments for polygon operations. We use lyon_geom
//! for accurate curve approximation with a fixed tolerance.

use std::fmt::Write;

use lyon_geom::{CubicBezierSegment, QuadraticBezierSegment, point};
use thiserror::Error;
use usvg::tiny_skia_path::PathSegment;

use crate::geometry::{BoundingBox, Line, Point, Ring};
use crate::polygon::Polygon;

/// Decimal places used when no precision is given.
pub const DEFAULT_SVG_PRECISION: usize = 2;

/// Error type for SVG parsing.
///
/// ## Rust Lesson #11: Error Handling
///
/// Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
/// `Display` and `std::error::Error` impls from the `#[error]` attributes,
/// so the enum stays just a list of what can go wrong.
#[derive(Debug, Error)]
pub enum SvgError {
    #[error("SVG parse error: {0}")]
    ParseError(String),

    #[error("no polygons found in SVG")]
    NoPolygons,
}

/// Extract one polygon per path element of an SVG document.
///
/// Every subpath becomes its own ring, so a path with holes keeps them as
/// extra rings. Closed subpaths end on an explicit copy of their first point.
///
/// ## Rust Lesson #12: The ? Operator
///
/// `expression?` is sugar for:
/// ```text
/// match expression {
///     Ok(v) => v,
///     Err(e) => return Err(e.into()),
/// }
/// ```
pub fn extract_polygons_from_svg(svg_content: &str) -> Result<Vec<Polygon>, SvgError> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options).map_err(|e| SvgError::ParseError(e.to_string()))?;

    let mut polygons = Vec::new();
    extract_from_group(tree.root(), &mut polygons);

    if polygons.is_empty() {
        Err(SvgError::NoPolygons)
    } else {
        Ok(polygons)
    }
}

fn extract_from_group(group: &usvg::Group, polygons: &mut Vec<Polygon>) {
    for child in group.children() {
        match child {
            usvg::Node::Group(group) => extract_from_group(group, polygons),
            usvg::Node::Path(path) => {
                if let Some(polygon) = path_to_polygon(path) {
                    polygons.push(polygon);
                }
            }
            // Ignore text, images, etc.
            _ => {}
        }
    }
}

/// Tolerance for curve flattening.
/// Lower = more points, smoother curves, slower.
const CURVE_TOLERANCE: f32 = 0.1;

/// Accumulates subpaths into rings.
#[derive(Default)]
struct RingCollector {
    rings: Vec<Ring>,
    current: Ring,
}

impl RingCollector {
    fn push(&mut self, x: f32, y: f32) {
        self.current.push(Point::new(x as f64, y as f64));
    }

    fn last(&self) -> Option<(f32, f32)> {
        self.current.last().map(|p| (p.x as f32, p.y as f32))
    }

    /// End the current subpath, optionally closing it.
    fn finish(&mut self, close: bool) {
        let mut ring = std::mem::take(&mut self.current);

        // Curve flattening can repeat a point
        ring.dedup_by(|a, b| a.equals(*b));

        if close && ring.len() > 2 && !ring[ring.len() - 1].equals(ring[0]) {
            ring.push(ring[0]);
        }
        if ring.len() >= 2 {
            self.rings.push(ring);
        }
    }
}

/// Convert a usvg path to a Polygon with one ring per subpath.
fn path_to_polygon(path: &usvg::Path) -> Option<Polygon> {
    let mut rings = RingCollector::default();

    // usvg already gives us absolute coordinates (no relative commands!)
    for segment in path.data().segments() {
        match segment {
            PathSegment::MoveTo(p) => {
                rings.finish(false);
                rings.push(p.x, p.y);
            }
            PathSegment::LineTo(p) => rings.push(p.x, p.y),
            PathSegment::QuadTo(ctrl, p) => match rings.last() {
                Some((lx, ly)) => {
                    let curve = QuadraticBezierSegment {
                        from: point(lx, ly),
                        ctrl: point(ctrl.x, ctrl.y),
                        to: point(p.x, p.y),
                    };
                    // The callback receives each flattened LineSegment; keep its endpoint
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| rings.push(seg.to.x, seg.to.y));
                }
                None => rings.push(p.x, p.y),
            },
            PathSegment::CubicTo(ctrl1, ctrl2, p) => match rings.last() {
                Some((lx, ly)) => {
                    let curve = CubicBezierSegment {
                        from: point(lx, ly),
                        ctrl1: point(ctrl1.x, ctrl1.y),
                        ctrl2: point(ctrl2.x, ctrl2.y),
                        to: point(p.x, p.y),
                    };
                    curve.for_each_flattened(CURVE_TOLERANCE, &mut |seg| rings.push(seg.to.x, seg.to.y));
                }
                None => rings.push(p.x, p.y),
            },
            PathSegment::Close => rings.finish(true),
        }
    }
    rings.finish(false);

    if rings.rings.is_empty() {
        None
    } else {
        Some(Polygon::from_rings(rings.rings))
    }
}

// ============================================================================
// EXPORT
// ============================================================================

/// SVG fragment for a value at `precision` decimal places.
pub trait ToSvg {
    fn to_svg(&self, precision: usize) -> String;
}

impl ToSvg for Point {
    fn to_svg(&self, prec: usize) -> String {
        format!(r#"<circle cx="{:.prec$}" cy="{:.prec$}" r="2" />"#, self.x, self.y)
    }
}

impl ToSvg for Line {
    fn to_svg(&self, prec: usize) -> String {
        format!(
            r#"<line x1="{:.prec$}" y1="{:.prec$}" x2="{:.prec$}" y2="{:.prec$}" />"#,
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}

/// One `<polyline>` line per non-empty ring.
impl ToSvg for Polygon {
    fn to_svg(&self, prec: usize) -> String {
        let mut svg = String::new();
        for ring in self.rings.iter().filter(|r| !r.is_empty()) {
            let _ = writeln!(svg, r#"<polyline points="{}" />"#, points_attr(ring, prec));
        }
        svg
    }
}

/// "x1,y1 x2,y2 x3,y3 ..."
fn points_attr(ring: &[Point], prec: usize) -> String {
    ring.iter()
        .map(|p| format!("{:.prec$},{:.prec$}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Standalone SVG document with every ring of every polygon as a polyline.
///
/// The viewBox is the bounding box of all points; with no points at all it
/// falls back to `0 0 1000 1000`.
pub fn svg_document(polygons: &[Polygon], prec: usize) -> String {
    let viewbox = BoundingBox::from_points(polygons.iter().flat_map(|p| p.rings.iter().flatten()))
        .map(|b| format!("{:.prec$} {:.prec$} {:.prec$} {:.prec$}", b.min_x, b.min_y, b.width, b.height))
        .unwrap_or_else(|| "0 0 1000 1000".to_string());

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{viewbox}">
<g stroke="black" stroke-width="0.5" fill="none">
"#
    );

    for polygon in polygons {
        for line in polygon.to_svg(prec).lines() {
            let _ = writeln!(svg, "  {line}");
        }
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}

// ============================================================================
// TESTS
// ============================================================================
