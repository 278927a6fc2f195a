//! Medoid selection.
//!
//! A medoid is a member of the sample itself minimizing an aggregate
//! distance criterion — a cheap, robust seed for the intrinsic estimators.
//! Selection is O(n²) in both time and memory (full pairwise separation
//! matrix), which is why the intrinsic estimators only use it below
//! [`crate::intrinsic::MEDOID_LIMIT`].

use s2_core::numeric::{accu_dot, accu_sum};
use s2_core::{SpherePoint, SymMatrix};

/// Indices of the two medoids of a sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Medoids {
    /// Index minimizing the sum of separations to all sample points
    /// (median-like seed).
    pub min_distance: usize,
    /// Index minimizing the sum of squared separations (mean-like seed).
    pub min_squared: usize,
}

/// Find both medoids of `points`.
///
/// Ties are broken by first occurrence in scan order.  Returns `None` for
/// an empty sample.  The pairwise matrix is built fresh for this call and
/// dropped before returning.
pub fn medoids(points: &[SpherePoint]) -> Option<Medoids> {
    let n = points.len();
    if n == 0 {
        return None;
    }

    let mut d = SymMatrix::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            d.set(i, j, points[i].separation(points[j]));
        }
    }

    let mut found = Medoids {
        min_distance: 0,
        min_squared: 0,
    };
    let (mut min1, mut min2) = (f64::INFINITY, f64::INFINITY);
    for k in 0..n {
        let sum1 = accu_sum(n, |i| d.get(k, i));
        let sum2 = accu_dot(n, |i| d.get(k, i), |i| d.get(k, i));
        if sum1 < min1 {
            found.min_distance = k;
            min1 = sum1;
        }
        if sum2 < min2 {
            found.min_squared = k;
            min2 = sum2;
        }
    }
    Some(found)
}
