//! Core geometry types for ringclip.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` / `Copy` = `Point` is two floats, so copies are implicit and free
//! - `PartialEq` = exact `==`; tolerant comparison lives in [`Point::equals`]
//! - `Serialize` / `Deserialize` = serde can read and write it as `{"x": .., "y": ..}`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default tolerance for point equality and ring stitching.
pub const EPSILON: f64 = 1e-6;

/// Determinants smaller than this are treated as parallel lines.
const PARALLEL_EPSILON: f64 = 1e-6;

/// An ordered sequence of points. Closed by convention when the last point equals the first.
pub type Ring = Vec<Point>;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
///
/// Lines are never stored inside a polygon; they exist only while a
/// computation needs them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

/// Axis-aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Overwrite both coordinates in place.
    ///
    /// The only mutating method on `Point`; everything else returns a new value.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Tolerant equality with the default [`EPSILON`].
    #[inline]
    pub fn equals(&self, other: Point) -> bool {
        self.equals_eps(other, EPSILON)
    }

    /// Both coordinates differ by strictly less than `epsilon`.
    #[inline]
    pub fn equals_eps(&self, other: Point, epsilon: f64) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    #[inline]
    pub fn distance_squared(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Linear interpolation towards `other`.
    ///
    /// `f` is not clamped: values outside `0..=1` extrapolate along the line.
    #[inline]
    pub fn lerp(&self, other: Point, f: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * f,
            self.y + (other.y - self.y) * f,
        )
    }

    #[inline]
    pub fn translate(&self, vector: Point) -> Point {
        Point::new(self.x + vector.x, self.y + vector.y)
    }

    /// Uniform scale about the origin.
    #[inline]
    pub fn scale(&self, factor: f64) -> Point {
        self.scale_around(factor, factor, Point::default())
    }

    /// Non-uniform scale about the origin.
    #[inline]
    pub fn scale_xy(&self, sx: f64, sy: f64) -> Point {
        self.scale_around(sx, sy, Point::default())
    }

    pub fn scale_around(&self, sx: f64, sy: f64, origin: Point) -> Point {
        Point::new(
            origin.x + (self.x - origin.x) * sx,
            origin.y + (self.y - origin.y) * sy,
        )
    }

    /// Rotate by `angle` radians about the origin.
    #[inline]
    pub fn rotate(&self, angle: f64) -> Point {
        self.rotate_around(angle, Point::default())
    }

    pub fn rotate_around(&self, angle: f64, origin: Point) -> Point {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Point::new(
            origin.x + dx * cos - dy * sin,
            origin.y + dx * sin + dy * cos,
        )
    }

    /// Is this point inside the segment's bounding box (widened by [`EPSILON`])?
    ///
    /// Cheap stand-in for "lies on the segment" once a point is already known
    /// to sit on the segment's supporting line.
    pub fn is_in_segment_area(&self, line: &Line) -> bool {
        let (p1, p2) = (line.p1, line.p2);
        self.x >= p1.x.min(p2.x) - EPSILON
            && self.x <= p1.x.max(p2.x) + EPSILON
            && self.y >= p1.y.min(p2.y) - EPSILON
            && self.y <= p1.y.max(p2.y) + EPSILON
    }
}

// ## Rust Lesson #4: From conversions
//
// Implementing `From<T>` gives callers `Point::from(t)` and `t.into()` for free.
// Any API that takes `impl Into<Point>` then accepts tuples, arrays and points alike.

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

/// `Point(1.0, 2.0)`. The formatter precision picks the decimals (default 1).
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(1);
        write!(f, "Point({:.prec$}, {:.prec$})", self.x, self.y)
    }
}

impl Line {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance(self.p2)
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.lerp(0.5)
    }

    #[inline]
    pub fn lerp(&self, f: f64) -> Point {
        self.p1.lerp(self.p2, f)
    }

    /// Interpolate both endpoints independently towards `other`.
    pub fn lerp_line(&self, other: &Line, f: f64) -> Line {
        Line::new(self.p1.lerp(other.p1, f), self.p2.lerp(other.p2, f))
    }

    /// Intersection point of two segments, if any.
    ///
    /// Each segment becomes a line `a·x + b·y = c` and the 2×2 system is solved
    /// with Cramer's rule. Parallel lines, collinear overlaps included, report
    /// `None`. The solution is accepted when it falls inside both segments'
    /// bounding boxes, which is an approximation of "on both segments".
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let (p1, p2) = (self.p1, self.p2);
        let (p3, p4) = (other.p1, other.p2);

        let a1 = p2.y - p1.y;
        let b1 = p1.x - p2.x;
        let c1 = a1 * p1.x + b1 * p1.y;

        let a2 = p4.y - p3.y;
        let b2 = p3.x - p4.x;
        let c2 = a2 * p3.x + b2 * p3.y;

        let det = a1 * b2 - a2 * b1;
        if det.abs() < PARALLEL_EPSILON {
            return None;
        }

        let hit = Point::new((b2 * c1 - b1 * c2) / det, (a1 * c2 - a2 * c1) / det);

        (hit.is_in_segment_area(self) && hit.is_in_segment_area(other)).then_some(hit)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prec = f.precision().unwrap_or(1);
        write!(f, "Line({:.prec$} -> {:.prec$})", self.p1, self.p2)
    }
}

impl BoundingBox {
    /// Bounds of every point yielded, or `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width / 2.0,
            self.min_y + self.height / 2.0,
        )
    }
}

/// Calculate signed area of a point sequence using the shoelace formula.
///
/// Returns:
/// - Positive value for counter-clockwise winding
/// - Negative value for clockwise winding
///
/// The sequence is treated as implicitly closed, so an explicit closing
/// point adds a zero-length edge and does not change the result.
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

// ============================================================================
// TESTS
// ============================================================================
