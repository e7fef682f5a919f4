//! Multi-ring polygons.
//!
//! One `Polygon` holds any number of rings. Depending on how it's used the
//! same container represents a polygon, a polygon with holes, a set of
//! disjoint shapes, or a bag of open polylines.
//!
//! ## Rust Lesson #6: Ownership & Vec
//!
//! `Vec<Vec<Point>>` means the polygon OWNS every ring and every point.
//! `clone()` therefore is a deep copy: two polygons never share points, and
//! mutating one can't leak into the other.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chain::{StitchConfig, stitch_rings};
use crate::clip::{self, Keep};
use crate::contain::is_point_in_polygon;
use crate::draw::DrawSurface;
use crate::error::GeometryError;
use crate::geometry::{BoundingBox, Line, Point, Ring, signed_area_of_points};

/// Target length of one arc sample, in drawing units.
const ARC_SAMPLE_LENGTH: f64 = 4.0;

/// An ordered collection of rings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

impl Polygon {
    /// Create a polygon with a single ring, optionally closing it.
    pub fn new(points: Vec<Point>, close: bool) -> Self {
        let mut polygon = Self::default();
        if !points.is_empty() {
            polygon.add_ring(points, close);
        }
        polygon
    }

    pub fn from_rings(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Regular polygon with `edges` corners on a circle of `radius`.
    pub fn n_edge(edges: usize, radius: f64, center: Point, rotation: f64) -> Result<Self, GeometryError> {
        if edges < 3 {
            return Err(GeometryError::TooFewEdges(edges));
        }

        let step = TAU / edges as f64;
        let points = (0..edges)
            .map(|i| polar(center, radius, i as f64 * step + rotation))
            .collect();

        Ok(Self::new(points, true))
    }

    /// Star with `edges` spikes, alternating between the outer and inner radius.
    pub fn star(
        edges: usize,
        radius_outer: f64,
        radius_inner: f64,
        center: Point,
        rotation: f64,
    ) -> Result<Self, GeometryError> {
        if edges < 3 {
            return Err(GeometryError::TooFewEdges(edges));
        }

        let step = TAU / edges as f64 / 2.0;
        let points = (0..edges * 2)
            .map(|i| {
                let radius = if i % 2 == 0 { radius_outer } else { radius_inner };
                polar(center, radius, i as f64 * step + rotation)
            })
            .collect();

        Ok(Self::new(points, true))
    }

    /// Closed polygon tracing an elliptic arc from `start` to `stop` radians.
    ///
    /// `dim` holds the ellipse's full width and height. The sample count
    /// follows the arc length (one sample roughly every 4 units, at least 3)
    /// and the last sample lands exactly on `stop`. `rotation` turns the
    /// samples about the origin.
    pub fn arc(center: Point, dim: Point, start: f64, stop: f64, rotation: Option<f64>) -> Self {
        let circumference = TAU * (dim.x + dim.y) / 2.0;
        let sweep = stop - start;
        let samples = (circumference / ARC_SAMPLE_LENGTH * sweep / TAU).floor().max(3.0) as usize;
        let step = sweep / samples as f64;

        let points = (0..=samples)
            .map(|i| {
                let angle = if i == samples { stop } else { start + i as f64 * step };
                let pt = Point::new(
                    center.x + dim.x / 2.0 * angle.cos(),
                    center.y + dim.y / 2.0 * angle.sin(),
                );
                match rotation {
                    Some(r) => pt.rotate(r),
                    None => pt,
                }
            })
            .collect();

        Self::new(points, true)
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Append a new ring. Anything convertible into a `Point` is accepted.
    pub fn add_ring<I, P>(&mut self, points: I, close: bool) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        self.rings.push(points.into_iter().map(Into::into).collect());
        if close {
            self.close_last_ring();
        }
        self
    }

    /// Append a point to the last ring, starting one if there is none.
    pub fn add_point(&mut self, pt: impl Into<Point>) -> &mut Self {
        let pt = pt.into();
        match self.rings.last_mut() {
            Some(ring) => ring.push(pt),
            None => self.rings.push(vec![pt]),
        }
        self
    }

    /// Close the last ring by repeating its first point.
    ///
    /// Does nothing when the ring is already closed or has fewer than 2 points.
    pub fn close_last_ring(&mut self) -> &mut Self {
        if let Some(ring) = self.rings.last_mut() {
            if ring.len() > 1 && !ring[ring.len() - 1].equals(ring[0]) {
                let first = ring[0];
                ring.push(first);
            }
        }
        self
    }

    /// Shift every point by `vector`.
    pub fn translate(&mut self, vector: impl Into<Point>) -> &mut Self {
        let vector = vector.into();
        self.map_points(|p| p.translate(vector))
    }

    /// Rotate every point by `angle` radians about `origin`.
    pub fn rotate(&mut self, angle: f64, origin: Point) -> &mut Self {
        self.map_points(|p| p.rotate_around(angle, origin))
    }

    /// Scale every point by `(sx, sy)` about `origin`.
    pub fn scale(&mut self, sx: f64, sy: f64, origin: Point) -> &mut Self {
        self.map_points(|p| p.scale_around(sx, sy, origin))
    }

    fn map_points(&mut self, f: impl Fn(Point) -> Point) -> &mut Self {
        for p in self.rings.iter_mut().flatten() {
            *p = f(*p);
        }
        self
    }

    /// Take over all rings of `other`, then stitch.
    pub fn merge(&mut self, other: Polygon) -> &mut Self {
        self.rings.extend(other.rings);
        self.optimize()
    }

    /// Stitch rings sharing endpoints (default tolerance).
    pub fn optimize(&mut self) -> &mut Self {
        self.optimize_with(&StitchConfig::default())
    }

    pub fn optimize_with(&mut self, config: &StitchConfig) -> &mut Self {
        let rings = std::mem::take(&mut self.rings);
        self.rings = stitch_rings(rings, config);
        self
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// True when no ring holds a point.
    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(|r| r.is_empty())
    }

    pub fn point_count(&self) -> usize {
        self.rings.iter().map(|r| r.len()).sum()
    }

    /// Total length of all rings.
    ///
    /// Only consecutive points are measured; a closed ring carries its closing
    /// edge explicitly, an open one has none.
    pub fn length(&self) -> f64 {
        self.rings
            .iter()
            .flat_map(|ring| ring.windows(2))
            .map(|pair| pair[0].distance(pair[1]))
            .sum()
    }

    /// Bounds of every point of every ring, computed fresh on each call.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.rings.iter().flatten())
    }

    /// Sum of the unsigned shoelace areas of all rings with 3+ points.
    pub fn area(&self) -> f64 {
        self.rings
            .iter()
            .filter(|ring| ring.len() >= 3)
            .map(|ring| signed_area_of_points(ring).abs())
            .sum()
    }

    /// Even-odd containment, boundaries included.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        is_point_in_polygon(pt, self)
    }

    // ------------------------------------------------------------------------
    // Boolean operators (see `clip` and `hull`)
    // ------------------------------------------------------------------------

    /// Clip `line` against this polygon's rings.
    pub fn clip_line(&self, line: Line, keep: Keep) -> Polygon {
        clip::clip_line(line, self, keep)
    }

    /// Clip this polygon's outline against `boundary`.
    pub fn clip_to(&self, boundary: &Polygon, keep: Keep) -> Polygon {
        clip::clip_to(self, boundary, keep)
    }

    /// Do the two polygons share a region of positive area?
    pub fn is_overlapping(&self, other: &Polygon) -> bool {
        clip::is_overlapping(self, other, clip::OVERLAP_EPSILON)
    }

    /// Keep the parts of `polyline` that fall inside this polygon.
    ///
    /// Unlike [`Polygon::clip_to`] this works point by point: each run of
    /// inside points becomes one ring. When a run starts after an outside
    /// point, the entering edge is walked back in unit steps to find the
    /// first inside sample, which approximates the boundary crossing.
    /// `rotation` turns every input point about the origin first.
    pub fn clip_polyline(&self, polyline: &[Point], rotation: Option<f64>) -> Polygon {
        let place = |p: Point| match rotation {
            Some(r) => p.rotate(r),
            None => p,
        };

        let mut result = Polygon::default();
        let mut current: Ring = Vec::new();
        let mut previous: Option<Point> = None;

        for &raw in polyline {
            let pt = place(raw);

            if self.contains(pt) {
                if current.is_empty() {
                    if let Some(prev) = previous {
                        if let Some(entry) = self.first_inside_sample(prev, pt) {
                            current.push(entry);
                        }
                    }
                }
                current.push(pt);
            } else if !current.is_empty() {
                result.rings.push(std::mem::take(&mut current));
            }

            previous = Some(pt);
        }

        if !current.is_empty() {
            result.rings.push(current);
        }
        result
    }

    fn first_inside_sample(&self, from: Point, to: Point) -> Option<Point> {
        let len = from.distance(to);
        if len <= 1.0 {
            return None;
        }

        let step = 1.0 / len;
        (1..)
            .map(|i| i as f64 * step)
            .take_while(|f| *f < 1.0)
            .map(|f| from.lerp(to, f))
            .find(|p| self.contains(*p))
    }

    /// Feed every non-empty ring to a drawing surface.
    ///
    /// Closed rings end with `close_path`.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        for ring in &self.rings {
            let Some((&first, rest)) = ring.split_first() else {
                continue;
            };

            surface.move_to(first);
            for &p in rest {
                surface.line_to(p);
            }
            if ring.len() > 2 && ring[ring.len() - 1].equals(first) {
                surface.close_path();
            }
        }
    }
}

/// Point at `angle` on a circle of `radius` around `center`.
#[inline]
fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// `Polygon(p, p, p | p, p)`: rings separated by `|`.
impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(1);
        write!(f, "Polygon(")?;
        for (i, ring) in self.rings.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            for (j, p) in ring.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{p:.prec$}")?;
            }
        }
        write!(f, ")")
    }
}

// ============================================================================
// TESTS
// ============================================================================
