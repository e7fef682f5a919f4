//! Point containment tests.
//!
//! Boundaries count as inside: a point lying on any ring edge is reported as
//! contained. Multi-ring polygons compose with the even-odd rule, so a second
//! ring nested in the first acts as a hole.

use crate::geometry::Point;
use crate::polygon::Polygon;

/// Tolerance used by [`is_point_in_ring`] for its on-edge check.
pub const ON_SEGMENT_EPSILON: f64 = 1e-9;

/// Check if `pt` lies on the segment `a`-`b`.
///
/// The cross product must vanish (collinear) and the point must fall inside
/// the segment's bounding box, both within `epsilon`.
#[inline]
pub fn is_point_on_segment(pt: Point, a: Point, b: Point, epsilon: f64) -> bool {
    let cross = (pt.x - a.x) * (b.y - a.y) - (pt.y - a.y) * (b.x - a.x);
    if cross.abs() > epsilon {
        return false;
    }

    pt.x >= a.x.min(b.x) - epsilon
        && pt.x <= a.x.max(b.x) + epsilon
        && pt.y >= a.y.min(b.y) - epsilon
        && pt.y <= a.y.max(b.y) + epsilon
}

/// Test if a point is inside a ring using ray casting.
///
/// Casts a ray to the right and counts edge crossings.
/// Odd crossings = inside, even = outside. The wrap-around edge from the last
/// point back to the first is always tested, so open rings behave as closed.
pub fn is_point_in_ring(pt: Point, ring: &[Point]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let a = ring[i];
        let b = ring[j];

        if is_point_on_segment(pt, a, b, ON_SEGMENT_EPSILON) {
            return true;
        }

        // Horizontal edges never straddle the ray, but keep the division finite.
        let dy = b.y - a.y;
        let denom = if dy == 0.0 { 1e-12 } else { dy };
        if ((a.y > pt.y) != (b.y > pt.y)) && (pt.x < (b.x - a.x) * (pt.y - a.y) / denom + a.x) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// Even-odd containment across every ring of `polygon`.
pub fn is_point_in_polygon(pt: Point, polygon: &Polygon) -> bool {
    polygon
        .rings
        .iter()
        .filter(|ring| is_point_in_ring(pt, ring))
        .fold(false, |inside, _| !inside)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::new(
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)],
            true,
        )
    }

    fn square(min: f64, max: f64) -> Vec<Point> {
        vec![
            Point::new(min, min),
            Point::new(max, min),
            Point::new(max, max),
            Point::new(min, max),
            Point::new(min, min),
        ]
    }

    #[test]
    fn point_on_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 10.0);
        assert!(is_point_on_segment(Point::new(5.0, 5.0), a, b, ON_SEGMENT_EPSILON));
        assert!(is_point_on_segment(a, a, b, ON_SEGMENT_EPSILON));
        assert!(!is_point_on_segment(Point::new(5.0, 6.0), a, b, ON_SEGMENT_EPSILON));
        // Collinear but past the end
        assert!(!is_point_on_segment(Point::new(11.0, 11.0), a, b, ON_SEGMENT_EPSILON));
    }

    #[test]
    fn triangle_containment() {
        let tri = triangle();
        assert!(is_point_in_polygon(Point::new(5.0, 3.0), &tri));
        assert!(!is_point_in_polygon(Point::new(15.0, 3.0), &tri));
        assert!(!is_point_in_polygon(Point::new(-1.0, 5.0), &tri));
    }

    #[test]
    fn boundary_counts_as_inside() {
        let ring = square(0.0, 10.0);
        assert!(is_point_in_ring(Point::new(0.0, 5.0), &ring));
        assert!(is_point_in_ring(Point::new(10.0, 10.0), &ring));
        assert!(is_point_in_ring(Point::new(5.0, 0.0), &ring));
    }

    #[test]
    fn open_ring_is_tested_as_closed() {
        let open = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)];
        assert!(is_point_in_ring(Point::new(5.0, 5.0), &open));
        // On the implicit closing edge
        assert!(is_point_in_ring(Point::new(0.0, 5.0), &open));
    }

    #[test]
    fn empty_ring_contains_nothing() {
        assert!(!is_point_in_ring(Point::new(0.0, 0.0), &[]));
        assert!(!is_point_in_polygon(Point::new(0.0, 0.0), &Polygon::default()));
    }

    #[test]
    fn nested_ring_is_a_hole() {
        let mut poly = Polygon::default();
        poly.add_ring(square(0.0, 20.0), false);
        poly.add_ring(square(5.0, 15.0), false);

        assert!(is_point_in_polygon(Point::new(2.0, 2.0), &poly));
        assert!(!is_point_in_polygon(Point::new(10.0, 10.0), &poly));
        assert!(!is_point_in_polygon(Point::new(30.0, 10.0), &poly));
    }

    #[test]
    fn disjoint_rings_both_count() {
        let mut poly = Polygon::default();
        poly.add_ring(square(0.0, 10.0), false);
        poly.add_ring(square(20.0, 30.0), false);

        assert!(is_point_in_polygon(Point::new(5.0, 5.0), &poly));
        assert!(is_point_in_polygon(Point::new(25.0, 25.0), &poly));
        assert!(!is_point_in_polygon(Point::new(15.0, 15.0), &poly));
    }
}
