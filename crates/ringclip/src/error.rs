//! Error types for the construction boundary.
//!
//! The clipping and containment code never fails: degenerate geometry is
//! absorbed there. Errors only come from building shapes out of bad input.

use thiserror::Error;

/// Errors raised while constructing points and polygons.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("polygon must have at least 3 edges, got {0}")]
    TooFewEdges(usize),

    #[error("expected an ordered sequence of points, got {0}")]
    NotASequence(String),

    #[error("point {index} is malformed: {reason}")]
    MalformedPoint { index: usize, reason: String },
}
