//! Ring stitching - join ring fragments that share endpoints.
//!
//! Clipping produces lots of two-point fragments. This module joins them
//! back together wherever the end of one ring matches the start of another
//! (within tolerance), so a clipped outline comes out as a few long rings
//! instead of hundreds of short ones.

use tracing::trace;

use crate::geometry::{EPSILON, Ring};

/// Configuration for ring stitching.
#[derive(Debug, Clone)]
pub struct StitchConfig {
    /// Maximum per-axis difference between endpoints to consider them connected.
    /// Default: 1e-6
    pub epsilon: f64,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl StitchConfig {
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

/// Stitch rings whose endpoints meet into longer rings.
///
/// # Algorithm
///
/// Repeated full scans over all ring pairs `(A, B)`:
///
/// 1. If `A` ends where `B` starts, `A` becomes `A ++ B[1..]` and `B` is consumed
/// 2. If `B` ends where `A` starts, `B` becomes `B ++ A[1..]` and `A` is consumed
/// 3. Stop after a scan that merged nothing
///
/// Rings are only ever appended, never reversed, so direction is preserved.
/// Surviving rings keep their original relative order; empty rings are dropped.
///
/// # Performance
///
/// O(n²) per scan and up to O(n) scans. Fine for the ring counts one
/// polygon clip produces, slow for very large inputs.
pub fn stitch_rings(mut rings: Vec<Ring>, config: &StitchConfig) -> Vec<Ring> {
    let epsilon = config.epsilon;
    let mut used = vec![false; rings.len()];
    let mut pass = 0usize;

    loop {
        let mut changed = false;

        for i in 0..rings.len() {
            if used[i] || rings[i].is_empty() {
                continue;
            }

            for j in 0..rings.len() {
                if i == j || used[j] || rings[j].is_empty() {
                    continue;
                }

                let (Some(&a_first), Some(&a_last)) = (rings[i].first(), rings[i].last()) else {
                    continue;
                };
                let (Some(&b_first), Some(&b_last)) = (rings[j].first(), rings[j].last()) else {
                    continue;
                };

                // ## Rust Lesson #5: std::mem::take
                //
                // We can't borrow rings[i] mutably while also reading rings[j].
                // `take` moves the Vec out (leaving an empty one behind), which
                // ends the borrow on rings[j] before we extend rings[i].
                if a_last.equals_eps(b_first, epsilon) {
                    let tail = std::mem::take(&mut rings[j]);
                    rings[i].extend(tail.into_iter().skip(1));
                    used[j] = true;
                    changed = true;
                    break;
                }
                if b_last.equals_eps(a_first, epsilon) {
                    let tail = std::mem::take(&mut rings[i]);
                    rings[j].extend(tail.into_iter().skip(1));
                    used[i] = true;
                    changed = true;
                    break;
                }
            }
        }

        pass += 1;
        trace!(pass, changed, "stitch pass");

        if !changed {
            break;
        }
    }

    rings
        .into_iter()
        .zip(used)
        .filter(|(ring, consumed)| !consumed && !ring.is_empty())
        .map(|(ring, _)| ring)
        .collect()
}

/// Statistics about a stitching run.
#[derive(Debug, Clone)]
pub struct StitchStats {
    /// Number of input rings
    pub input_rings: usize,
    /// Number of output rings
    pub output_rings: usize,
    /// Longest ring (points)
    pub max_ring_length: usize,
    /// Reduction ratio (1.0 - output/input)
    pub reduction_ratio: f64,
}

impl StitchStats {
    pub fn from_rings(input_count: usize, rings: &[Ring]) -> Self {
        let output_rings = rings.len();
        let max_ring_length = rings.iter().map(|r| r.len()).max().unwrap_or(0);

        Self {
            input_rings: input_count,
            output_rings,
            max_ring_length,
            reduction_ratio: if input_count > 0 {
                1.0 - (output_rings as f64 / input_count as f64)
            } else {
                0.0
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
