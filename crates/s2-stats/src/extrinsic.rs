//! Extrinsic location estimators.
//!
//! "Extrinsic" means the points are treated as vectors in the ambient
//! Euclidean space E³; the estimate is computed there and then projected
//! back onto S² by normalization.  Both estimators are O(n) (plus the
//! Weiszfeld iterations inside `vmedian3`) and serve as seeds for the
//! intrinsic estimators when the sample is too large for medoid selection.

use s2_core::numeric::{accu_sum, vmedian3};
use s2_core::{EPSILON, SpherePoint};

use crate::error::{StatsError, StatsResult};

/// Extrinsic sample mean: compensated componentwise vector sum, projected
/// back to the sphere by normalization.
///
/// # Errors
///
/// - [`StatsError::EmptySample`] for an empty sample.
/// - [`StatsError::SingularMean`] when the vector sum cancels to (numerical)
///   zero — e.g. a sample symmetric under point reflection through the
///   origin — and the mean direction is undefined.  The singular case is an
///   explicit error rather than a silent fallback pole.
pub fn ext_mean(points: &[SpherePoint]) -> StatsResult<SpherePoint> {
    let n = points.len();
    if n == 0 {
        return Err(StatsError::EmptySample);
    }
    let sx = accu_sum(n, |i| points[i].cartesian()[0]);
    let sy = accu_sum(n, |i| points[i].cartesian()[1]);
    let sz = accu_sum(n, |i| points[i].cartesian()[2]);
    let r = sx.hypot(sy).hypot(sz);
    if r <= EPSILON * n as f64 {
        return Err(StatsError::SingularMean);
    }
    Ok(SpherePoint::from_cartesian([sx / r, sy / r, sz / r]))
}

/// Extrinsic geometric median: the E³ geometric median of the Cartesian
/// coordinates, projected back to the sphere by normalization.
///
/// # Errors
///
/// [`StatsError::EmptySample`] for an empty sample.
pub fn ext_median(points: &[SpherePoint]) -> StatsResult<SpherePoint> {
    if points.is_empty() {
        return Err(StatsError::EmptySample);
    }
    let xyz: Vec<[f64; 3]> = points.iter().map(|p| p.cartesian()).collect();
    Ok(SpherePoint::from_cartesian(vmedian3(&xyz)))
}
