//! Ripley's K function on the unit sphere.
//!
//! `k_poisson` is the theoretical K for a complete-spatial-randomness
//! (Poisson) process on S²; `k_ripley` is its empirical pairwise-count
//! estimator.  Comparing the two at a range of separations reveals
//! clustering (estimate above theory) or inhibition (below).

use std::f64::consts::{PI, TAU};

use s2_core::SpherePoint;

/// Theoretical K function of the Poisson process on S² at angular
/// separation `theta`: 2π(1 − cos θ), the area of the spherical cap of
/// radius θ.  `None` when θ ∉ [0, π].
pub fn k_poisson(theta: f64) -> Option<f64> {
    if !(0.0..=PI).contains(&theta) {
        return None;
    }
    Some(TAU * (1.0 - theta.cos()))
}

/// Ripley's K estimate for `points` at angular separation `theta`:
/// 8π·k / (n(n−1)) with k the number of unordered pairs separated by
/// ≤ θ.  `None` when the sample has fewer than 2 points or θ ∉ [0, π].
pub fn k_ripley(points: &[SpherePoint], theta: f64) -> Option<f64> {
    let n = points.len();
    if n < 2 || !(0.0..=PI).contains(&theta) {
        return None;
    }

    let mut pairs = 0u64;
    for (i, pi) in points.iter().enumerate() {
        for pj in &points[i + 1..] {
            if pi.separation(*pj) <= theta {
                pairs += 1;
            }
        }
    }
    Some(8.0 * PI * pairs as f64 / (n * (n - 1)) as f64)
}
