//! Non-parametric bootstrap confidence cones.
//!
//! # Procedure
//!
//! B resampling rounds, each drawing n points with replacement from the
//! sample and recomputing the chosen estimator; the angular separations
//! between each resample's estimate and the full-sample estimate are
//! sorted, and the 95%/99% order statistics become the cone half-angles.
//!
//! # Cost
//!
//! O(B) estimator recomputations, each O(n) for the extrinsic estimators
//! and up to O(n²) per round for the intrinsic ones (medoid seeding) —
//! wrapping an intrinsic estimator here is deliberate-use-only territory.

use s2_core::{SpherePoint, StatRng};

use crate::error::{StatsError, StatsResult};
use crate::estimate::{EstimatorKind, LocationEstimate};

/// Default number of bootstrap resampling rounds.
///
/// More rounds sharpen the quantile estimate linearly in cost; 10,000
/// puts the 95%/99% order statistics well inside the stable range.
pub const DEFAULT_RESAMPLES: usize = 10_000;

// ── BootstrapConfig ───────────────────────────────────────────────────────────

/// Bootstrap tuning knobs.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BootstrapConfig {
    /// Resampling rounds B.  Must be ≥ 100 so the 95% order statistic
    /// exists.
    pub resamples: usize,
    /// RNG seed.  `0` is a sentinel meaning "seed from the current time"
    /// (non-reproducible); pass any non-zero value for reproducible runs.
    pub seed: u64,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        BootstrapConfig {
            resamples: DEFAULT_RESAMPLES,
            seed: 0,
        }
    }
}

// ── BootstrapCones ────────────────────────────────────────────────────────────

/// A point estimate with its two bootstrap confidence cones.
///
/// Each cone half-angle is half the vertex angle of a cone centered at
/// `estimate.point` that is estimated to contain the true location at the
/// stated confidence.  `c95_deg ≤ c99_deg` by construction: both are order
/// statistics of the same sorted separations at non-decreasing quantiles.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BootstrapCones {
    /// The full-sample estimate the cones are centered on.
    pub estimate: LocationEstimate,
    /// 95% confidence-cone half-angle, degrees.
    pub c95_deg: f64,
    /// 99% confidence-cone half-angle, degrees.
    pub c99_deg: f64,
}

/// Estimate a central location and its 95%/99% bootstrap confidence cones.
///
/// Deterministic for a fixed non-zero `config.seed`: two invocations with
/// identical sample, estimator, and seed produce bit-identical results.
/// The RNG is owned privately by this call; nothing is shared across
/// concurrent invocations.
///
/// # Errors
///
/// [`StatsError::EmptySample`], [`StatsError::TooFewResamples`], and any
/// error of the wrapped estimator (a degenerate resample can make the
/// extrinsic mean singular mid-run; that error propagates).
pub fn bootstrap_cones(
    points: &[SpherePoint],
    kind: EstimatorKind,
    config: &BootstrapConfig,
) -> StatsResult<BootstrapCones> {
    let n = points.len();
    if n == 0 {
        return Err(StatsError::EmptySample);
    }
    let b = config.resamples;
    if b < 100 {
        return Err(StatsError::TooFewResamples(b));
    }

    let full = kind.estimate(points)?;

    let mut rng = StatRng::from_seed_or_time(config.seed);
    let mut resample = vec![points[0]; n];
    let mut seps = Vec::with_capacity(b);
    for _ in 0..b {
        for slot in resample.iter_mut() {
            *slot = points[rng.index(n)];
        }
        let est = kind.estimate(&resample)?;
        seps.push(full.point.separation(est.point));
    }

    seps.sort_unstable_by(f64::total_cmp);
    // 1-indexed order statistics ⌊0.95·B⌋ and ⌊0.99·B⌋
    let b95 = b * 95 / 100;
    let b99 = b * 99 / 100;
    Ok(BootstrapCones {
        estimate: full,
        c95_deg: seps[b95 - 1].to_degrees(),
        c99_deg: seps[b99 - 1].to_degrees(),
    })
}
