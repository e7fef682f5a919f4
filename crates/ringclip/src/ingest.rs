//! Building points and polygons from loosely-shaped JSON input.
//!
//! A point may arrive as a coordinate pair `[x, y]` or a labeled object
//! `{"x": .., "y": ..}`. Everything is normalized to [`Point`] right here,
//! so the rest of the crate only ever sees canonical values.

use serde::Deserialize;
use serde_json::Value;

use crate::error::GeometryError;
use crate::geometry::{Point, Ring};
use crate::polygon::Polygon;

/// Any accepted spelling of a point.
///
/// ## Rust Lesson #10: Untagged enums
///
/// `#[serde(untagged)]` tries each variant in order until one deserializes.
/// No `"type"` field is needed in the JSON: the shape of the value decides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PointInput {
    Pair(Vec<f64>),
    Labeled { x: f64, y: f64 },
}

impl TryFrom<PointInput> for Point {
    type Error = String;

    fn try_from(input: PointInput) -> Result<Self, Self::Error> {
        match input {
            // Extra coordinates (a z, say) are ignored
            PointInput::Pair(coords) => match coords.as_slice() {
                [x, y, ..] => Ok(Point::new(*x, *y)),
                _ => Err(format!("coordinate pair needs 2 numbers, got {}", coords.len())),
            },
            PointInput::Labeled { x, y } => Ok(Point::new(x, y)),
        }
    }
}

/// Parse a single point from any accepted spelling.
pub fn point_from_value(value: &Value) -> Result<Point, String> {
    let input = PointInput::deserialize(value).map_err(|_| format!("not a point: {value}"))?;
    Point::try_from(input)
}

/// Parse an ordered sequence of points.
pub fn ring_from_value(value: &Value) -> Result<Ring, GeometryError> {
    let items = value
        .as_array()
        .ok_or_else(|| GeometryError::NotASequence(kind_of(value).to_string()))?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| point_from_value(item).map_err(|reason| GeometryError::MalformedPoint { index, reason }))
        .collect()
}

/// Parse a polygon.
///
/// Accepts `{"rings": [ring, ...]}`, a bare list of rings, or a single ring
/// (a list whose first element is itself a point). Rings are taken as given;
/// nothing is closed automatically.
pub fn polygon_from_value(value: &Value) -> Result<Polygon, GeometryError> {
    if let Some(rings) = value.get("rings") {
        return rings_from_value(rings).map(Polygon::from_rings);
    }

    let items = value
        .as_array()
        .ok_or_else(|| GeometryError::NotASequence(kind_of(value).to_string()))?;

    if items.first().is_some_and(|first| point_from_value(first).is_ok()) {
        return ring_from_value(value).map(|ring| Polygon::from_rings(vec![ring]));
    }

    rings_from_value(value).map(Polygon::from_rings)
}

fn rings_from_value(value: &Value) -> Result<Vec<Ring>, GeometryError> {
    value
        .as_array()
        .ok_or_else(|| GeometryError::NotASequence(kind_of(value).to_string()))?
        .iter()
        .map(ring_from_value)
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pair_and_labeled_points() {
        assert_eq!(point_from_value(&json!([1.5, 2.0])), Ok(Point::new(1.5, 2.0)));
        assert_eq!(point_from_value(&json!({"x": 3, "y": -4})), Ok(Point::new(3.0, -4.0)));
        assert_eq!(point_from_value(&json!([1, 2, 3])), Ok(Point::new(1.0, 2.0)));
    }

    #[test]
    fn bad_points_are_rejected() {
        assert!(point_from_value(&json!([1])).is_err());
        assert!(point_from_value(&json!("1,2")).is_err());
        assert!(point_from_value(&json!({"x": 1})).is_err());
    }

    #[test]
    fn ring_mixes_spellings() {
        let ring = ring_from_value(&json!([[0, 0], {"x": 10, "y": 0}, [10, 10]])).unwrap();
        assert_eq!(ring, vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn ring_must_be_a_sequence() {
        assert_eq!(
            ring_from_value(&json!({"x": 1, "y": 2})),
            Err(GeometryError::NotASequence("an object".to_string()))
        );
        assert_eq!(ring_from_value(&json!(42)), Err(GeometryError::NotASequence("a number".to_string())));
    }

    #[test]
    fn malformed_point_reports_index() {
        let err = ring_from_value(&json!([[0, 0], [1, 1], "oops"])).unwrap_err();
        assert!(matches!(err, GeometryError::MalformedPoint { index: 2, .. }), "{err}");
    }

    #[test]
    fn polygon_shapes() {
        let tagged = polygon_from_value(&json!({"rings": [[[0, 0], [1, 0], [1, 1]]]})).unwrap();
        let bare = polygon_from_value(&json!([[[0, 0], [1, 0], [1, 1]]])).unwrap();
        let single = polygon_from_value(&json!([[0, 0], [1, 0], [1, 1]])).unwrap();

        assert_eq!(tagged, bare);
        assert_eq!(bare, single);
        assert_eq!(single.rings[0].len(), 3, "no implicit closing");
    }

    #[test]
    fn polygon_serde_round_trip_shape() {
        let poly = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)], false);
        let value = serde_json::to_value(&poly).unwrap();
        assert_eq!(value, json!({"rings": [[{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 2.0}]]}));
        assert_eq!(polygon_from_value(&value).unwrap(), poly);
    }

    #[test]
    fn polygon_rejects_scalars() {
        assert!(matches!(polygon_from_value(&json!("square")), Err(GeometryError::NotASequence(_))));
        assert!(matches!(polygon_from_value(&json!({"rings": 3})), Err(GeometryError::NotASequence(_))));
    }
}
