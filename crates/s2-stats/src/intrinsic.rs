//! Intrinsic (Fréchet) location estimators.
//!
//! # Algorithm
//!
//! Fixed-point refinement of a seed center:
//!
//! ```text
//! repeat (≤ MAX_ITERATIONS):
//!   ① project every sample point into the tangent plane at the center
//!   ② take the planar mean (mean branch) or planar geometric median
//!      (median branch, z held at 0 so `vmedian3` works in the plane)
//!   ③ map the planar centroid back through the tangent projection
//!   ④ converged when the center moved ≤ CONVERGENCE_TOL
//! ```
//!
//! # Seeding policy
//!
//! Small samples (n ≤ [`MEDOID_LIMIT`]) seed from the matching medoid:
//! the minimal-squared-distance medoid for the mean, the minimal-distance
//! medoid for the median.  Larger samples skip the O(n²) medoid scan and
//! seed from the corresponding extrinsic estimate.  The threshold is an
//! empirical accuracy/cost trade-off, not a hard algorithmic bound.

use s2_core::numeric::{vmean3, vmedian3};
use s2_core::{EPSILON, SpherePoint};

use crate::error::{StatsError, StatsResult};
use crate::estimate::{EstimatorKind, LocationEstimate};
use crate::extrinsic::{ext_mean, ext_median};
use crate::medoid::medoids;
use crate::project::{plane_coords, sphere_point};

/// Largest sample size seeded via the O(n²) medoid scan.  Tunable
/// performance/accuracy trade-off; above it the extrinsic estimate seeds
/// the iteration instead.
pub const MEDOID_LIMIT: usize = 10_000;

/// Hard cap on refinement iterations.
pub const MAX_ITERATIONS: u32 = 1_000;

/// Angular movement (radians) below which the iteration has converged.
/// One consistent tolerance for both the mean and median paths: machine
/// epsilon scaled by the full circle.
pub const CONVERGENCE_TOL: f64 = EPSILON * std::f64::consts::TAU;

/// Intrinsic sample mean: minimizes the sum of squared geodesic distances.
///
/// # Errors
/// [`StatsError::EmptySample`]; [`StatsError::SingularMean`] when a large
/// sample's extrinsic-mean seed is singular.
pub fn int_mean(points: &[SpherePoint]) -> StatsResult<LocationEstimate> {
    refine(points, EstimatorKind::IntrinsicMean)
}

/// Intrinsic sample median: minimizes the sum of geodesic distances.
///
/// # Errors
/// [`StatsError::EmptySample`].
pub fn int_median(points: &[SpherePoint]) -> StatsResult<LocationEstimate> {
    refine(points, EstimatorKind::IntrinsicMedian)
}

fn refine(points: &[SpherePoint], kind: EstimatorKind) -> StatsResult<LocationEstimate> {
    let n = points.len();
    if n == 0 {
        return Err(StatsError::EmptySample);
    }
    if n == 1 {
        return Ok(LocationEstimate {
            point: points[0],
            estimator: kind,
            iterations: 1,
            converged: true,
        });
    }
    let mean_branch = kind == EstimatorKind::IntrinsicMean;

    let mut center = if n <= MEDOID_LIMIT {
        let Some(m) = medoids(points) else {
            return Err(StatsError::EmptySample);
        };
        points[if mean_branch { m.min_squared } else { m.min_distance }]
    } else if mean_branch {
        ext_mean(points)?
    } else {
        ext_median(points)?
    };

    // planar sample, z held at 0 for both branches
    let mut xyz = vec![[0.0f64; 3]; n];
    for iter in 1..=MAX_ITERATIONS {
        for (row, p) in xyz.iter_mut().zip(points) {
            let (x, y) = plane_coords(center, *p);
            row[0] = x;
            row[1] = y;
        }
        let planar = if mean_branch {
            vmean3(&xyz)
        } else {
            vmedian3(&xyz)
        };
        let next = sphere_point(center, planar[0], planar[1]);
        if center.separation(next) <= CONVERGENCE_TOL {
            return Ok(LocationEstimate {
                point: next,
                estimator: kind,
                iterations: iter,
                converged: true,
            });
        }
        center = next;
    }

    Ok(LocationEstimate {
        point: center,
        estimator: kind,
        iterations: MAX_ITERATIONS,
        converged: false,
    })
}
