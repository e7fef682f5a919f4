//! Segment and polygon clipping.
//!
//! This is the HOT PATH: `clip_to` calls `clip_line` once per subject edge,
//! and `outer_hull` calls `clip_to` once per polygon pair.
//!
//! ## Multi-ring boundaries
//!
//! `clip_line` applies the boundary's rings one after another: the fragments
//! that survive ring 0 are clipped by ring 1, and so on. This is NOT the
//! even-odd rule `contains` uses for the same polygon, so a boundary with a
//! hole clips differently from how it tests points. Both behaviors are kept
//! as they are.

use tracing::debug;

use crate::contain::is_point_in_ring;
use crate::geometry::{EPSILON, Line, Point, signed_area_of_points};
use crate::polygon::Polygon;

/// Total area above which two polygons count as overlapping.
pub const OVERLAP_EPSILON: f64 = 1e-9;

/// Which side of a boundary survives a clip.
///
/// ## Rust Lesson #7: Enums over bools
///
/// `clip_line(line, &square, Keep::Outside)` reads better at the call site
/// than `clip_line(line, &square, false)`, and the compiler won't let you
/// mix it up with some other boolean argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Keep {
    #[default]
    Inside,
    Outside,
}

impl Keep {
    #[inline]
    fn wants(self, inside: bool) -> bool {
        match self {
            Keep::Inside => inside,
            Keep::Outside => !inside,
        }
    }
}

/// Add `pt` unless an existing point lies within [`EPSILON`] of it.
#[inline]
fn insert_unique(points: &mut Vec<Point>, pt: Point) -> bool {
    if points.iter().any(|p| p.distance(pt) < EPSILON) {
        return false;
    }
    points.push(pt);
    true
}

/// Clip a line segment against every ring of `boundary`.
///
/// For each ring, each candidate piece collects its crossings with the ring
/// edges plus whichever endpoints lie on the kept side. Sorted along the
/// piece, those points pair up `(0,1), (2,3), …` into the pieces that go on
/// to the next ring.
///
/// An odd number of points leaves the last one unpaired, and it is dropped.
/// That happens when the segment just grazes a vertex. The result then
/// misses a piece, which is a known gap rather than something to patch here.
///
/// Returns one ring per surviving piece, stitched once.
pub fn clip_line(line: Line, boundary: &Polygon, keep: Keep) -> Polygon {
    let mut segments = vec![(line.p1, line.p2)];

    for ring in &boundary.rings {
        let n = ring.len();
        if n < 2 {
            continue;
        }

        let mut survivors = Vec::with_capacity(segments.len());

        for &(start, end) in &segments {
            let piece = Line::new(start, end);
            let mut points = Vec::with_capacity(4);

            for i in 0..n {
                let edge = Line::new(ring[i], ring[(i + 1) % n]);
                if let Some(hit) = piece.intersection(&edge) {
                    insert_unique(&mut points, hit);
                }
            }

            if keep.wants(is_point_in_ring(start, ring)) {
                insert_unique(&mut points, start);
            }
            if keep.wants(is_point_in_ring(end, ring)) {
                insert_unique(&mut points, end);
            }

            points.sort_by(|a, b| start.distance_squared(*a).total_cmp(&start.distance_squared(*b)));

            if points.len() % 2 == 1 {
                debug!(
                    start = %start,
                    end = %end,
                    count = points.len(),
                    "odd clip point count, dropping trailing point"
                );
            }

            // ## Rust Lesson #8: chunks_exact
            //
            // `chunks_exact(2)` yields [p0,p1], [p2,p3], ... and silently
            // skips a leftover element - exactly the pairing we want.
            survivors.extend(points.chunks_exact(2).map(|pair| (pair[0], pair[1])));
        }

        segments = survivors;
        if segments.is_empty() {
            break;
        }
    }

    let mut result = Polygon::from_rings(segments.into_iter().map(|(a, b)| vec![a, b]).collect());
    result.optimize();
    result
}

/// Clip every edge of `subject` against `boundary`.
///
/// Edges are consecutive point pairs, so an open ring stays open. A
/// boundary without rings clips nothing and returns a copy of `subject`.
pub fn clip_to(subject: &Polygon, boundary: &Polygon, keep: Keep) -> Polygon {
    if boundary.rings.is_empty() {
        return subject.clone();
    }

    let mut merged = Polygon::default();
    for ring in &subject.rings {
        for pair in ring.windows(2) {
            let clipped = clip_line(Line::new(pair[0], pair[1]), boundary, keep);
            merged.rings.extend(clipped.rings.into_iter().filter(|r| !r.is_empty()));
        }
    }

    merged.optimize();
    merged
}

/// Do `a` and `b` share more than `epsilon` of area?
///
/// Clips each outline to the other and adds up the area of every clipped
/// ring with at least 3 points. Polygons that only touch along an edge or
/// at a corner clip to two-point rings, which have no area.
pub fn is_overlapping(a: &Polygon, b: &Polygon, epsilon: f64) -> bool {
    let mut total = 0.0;

    for (subject, boundary) in [(a, b), (b, a)] {
        let clipped = clip_to(subject, boundary, Keep::Inside);
        for ring in clipped.rings.iter().filter(|r| r.len() >= 3) {
            total += signed_area_of_points(ring).abs();
            if total > epsilon {
                return true;
            }
        }
    }

    false
}

// ============================================================================
// TESTS
// ============================================================================
