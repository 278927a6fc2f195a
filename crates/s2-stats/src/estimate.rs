//! Estimator selection and estimate provenance.

use std::fmt;

use s2_core::SpherePoint;

use crate::error::StatsResult;
use crate::extrinsic::{ext_mean, ext_median};
use crate::intrinsic::{int_mean, int_median};

// ── EstimatorKind ─────────────────────────────────────────────────────────────

/// Which location estimator to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EstimatorKind {
    ExtrinsicMean,
    ExtrinsicMedian,
    IntrinsicMean,
    IntrinsicMedian,
}

impl EstimatorKind {
    /// Run this estimator over `points`.
    ///
    /// Extrinsic estimates carry `iterations = 0, converged = true`;
    /// intrinsic estimates report their refinement loop's outcome.
    pub fn estimate(self, points: &[SpherePoint]) -> StatsResult<LocationEstimate> {
        match self {
            EstimatorKind::ExtrinsicMean => ext_mean(points).map(|p| LocationEstimate::direct(p, self)),
            EstimatorKind::ExtrinsicMedian => {
                ext_median(points).map(|p| LocationEstimate::direct(p, self))
            }
            EstimatorKind::IntrinsicMean => int_mean(points),
            EstimatorKind::IntrinsicMedian => int_median(points),
        }
    }

    /// `true` for the iterative (Fréchet) estimators.
    #[inline]
    pub fn is_intrinsic(self) -> bool {
        matches!(self, EstimatorKind::IntrinsicMean | EstimatorKind::IntrinsicMedian)
    }
}

impl fmt::Display for EstimatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EstimatorKind::ExtrinsicMean => "extrinsic mean",
            EstimatorKind::ExtrinsicMedian => "extrinsic median",
            EstimatorKind::IntrinsicMean => "intrinsic mean",
            EstimatorKind::IntrinsicMedian => "intrinsic median",
        };
        f.write_str(name)
    }
}

// ── LocationEstimate ──────────────────────────────────────────────────────────

/// A central-location estimate with its provenance.
///
/// Non-convergence of an intrinsic estimator is reported here as
/// `converged: false` — an explicit flag, not a magic iteration count the
/// caller has to compare against the cap.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationEstimate {
    /// The estimated central location.
    pub point: SpherePoint,
    /// Which estimator produced it.
    pub estimator: EstimatorKind,
    /// Refinement iterations used (0 for extrinsic estimators).
    pub iterations: u32,
    /// Whether the refinement met its tolerance (always `true` for
    /// extrinsic estimators).
    pub converged: bool,
}

impl LocationEstimate {
    /// Estimate from a non-iterative (extrinsic) computation.
    pub(crate) fn direct(point: SpherePoint, estimator: EstimatorKind) -> Self {
        LocationEstimate {
            point,
            estimator,
            iterations: 0,
            converged: true,
        }
    }
}

impl fmt::Display for LocationEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.estimator, self.point)?;
        if self.estimator.is_intrinsic() {
            write!(
                f,
                " ({} iterations{})",
                self.iterations,
                if self.converged { "" } else { ", not converged" }
            )?;
        }
        Ok(())
    }
}
