//! Outer hull: a heuristic union of several polygons.
//!
//! Each polygon's outline is clipped against every other polygon, keeping
//! only what lies outside them. What's left of all outlines is merged and
//! stitched into the union's boundary.
//!
//! Exact for two polygons. With three or more, regions covered by three
//! polygons at once are not guaranteed to come out right.

use tracing::debug;

use crate::clip::{Keep, clip_to};
use crate::polygon::Polygon;

/// Union boundary of `polygons`.
///
/// Polygons without a single point are ignored. No usable input gives an
/// empty polygon.
pub fn outer_hull<'a, I>(polygons: I) -> Polygon
where
    I: IntoIterator<Item = &'a Polygon>,
{
    let valid: Vec<&Polygon> = polygons.into_iter().filter(|p| !p.is_empty()).collect();
    if valid.is_empty() {
        return Polygon::default();
    }

    let mut union = Polygon::default();

    for (i, &polygon) in valid.iter().enumerate() {
        // Clips chain: the outline left over by one polygon goes into the next
        let mut outer: Option<Polygon> = None;
        for (j, &other) in valid.iter().enumerate() {
            if i == j {
                continue;
            }
            let current = outer.as_ref().unwrap_or(polygon);
            outer = Some(clip_to(current, other, Keep::Outside));
        }

        let outer = outer.unwrap_or_else(|| polygon.clone());
        union.merge(outer);
    }

    union.optimize();

    debug!(
        inputs = valid.len(),
        rings = union.rings.len(),
        points = union.point_count(),
        "outer hull built"
    );

    union
}

impl Polygon {
    /// Union boundary of this polygon and `others`. See [`outer_hull`].
    pub fn outer_hull<'a, I>(&'a self, others: I) -> Polygon
    where
        I: IntoIterator<Item = &'a Polygon>,
    {
        outer_hull(std::iter::once(self).chain(others))
    }
}

// ============================================================================
// TESTS
// ============================================================================
