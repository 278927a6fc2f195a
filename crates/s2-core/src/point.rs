//! Unit-sphere point type.
//!
//! # Representation
//!
//! A `SpherePoint` is an immutable unit vector in ℝ³.  Geographic
//! coordinates (latitude, longitude, both in degrees) are a view, not the
//! storage: conversion happens at the boundary and every interior
//! computation works on the Cartesian form.
//!
//! # Separation formula
//!
//! `separation` splits on the sign of the dot product and uses the
//! 2·asin(‖u∓v‖/2) chord formulation instead of acos(u·v).  The acos form
//! loses up to half the significand near 0 and π; the chord form is
//! accurate over the whole range and returns exactly π/2 for orthogonal
//! unit vectors.

use crate::error::{S2Error, S2Result};
use crate::numeric::{sin_cos_deg, vhat3, vnorm3};
use crate::rng::StatRng;

/// A point on the unit sphere S².
///
/// Value type: `Copy`, never mutated, freely shared.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpherePoint {
    c: [f64; 3],
}

impl SpherePoint {
    /// The canonical pole `(0, 0, 1)` — latitude 90°.
    pub const NORTH_POLE: SpherePoint = SpherePoint { c: [0.0, 0.0, 1.0] };

    /// Point at the given geographic coordinates (degrees).
    ///
    /// Fails when `lat ∉ [−90, 90]` or `lon ∉ [−180, 180]`; out-of-range
    /// input is rejected, never clamped.
    pub fn from_geographic(lat: f64, lon: f64) -> S2Result<SpherePoint> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(S2Error::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(S2Error::LongitudeOutOfRange(lon));
        }
        let (slat, clat) = sin_cos_deg(lat);
        let (slon, clon) = sin_cos_deg(lon);
        Ok(SpherePoint {
            c: [clat * clon, clat * slon, slat],
        })
    }

    /// Point in the direction of an arbitrary Cartesian vector.
    ///
    /// The vector is normalized; the all-zero vector canonicalizes to
    /// [`SpherePoint::NORTH_POLE`] rather than producing NaN.
    pub fn from_cartesian(v: [f64; 3]) -> SpherePoint {
        SpherePoint { c: vhat3(v) }
    }

    /// Cartesian coordinates (x, y, z).
    #[inline]
    pub fn cartesian(self) -> [f64; 3] {
        self.c
    }

    /// Geographic coordinates (latitude, longitude) in degrees.
    ///
    /// At the poles the longitude is undefined; `atan2(0, 0) = 0` is
    /// returned there.
    pub fn geographic(self) -> (f64, f64) {
        let [x, y, z] = self.c;
        let lat = z.atan2(x.hypot(y)).to_degrees();
        let lon = y.atan2(x).to_degrees();
        (lat, lon)
    }

    /// Great-circle separation angle to `other`, in radians.
    ///
    /// Total over all point pairs: 0 on self, π/2 at orthogonal, π at
    /// antipodal.
    pub fn separation(self, other: SpherePoint) -> f64 {
        let u = self.c;
        let v = other.c;
        let dot = u[0] * v[0] + u[1] * v[1] + u[2] * v[2];
        if dot > 0.0 {
            let chord = vnorm3([u[0] - v[0], u[1] - v[1], u[2] - v[2]]);
            2.0 * (chord / 2.0).asin()
        } else if dot < 0.0 {
            let chord = vnorm3([u[0] + v[0], u[1] + v[1], u[2] + v[2]]);
            std::f64::consts::PI - 2.0 * (chord / 2.0).asin()
        } else {
            std::f64::consts::FRAC_PI_2
        }
    }

    /// The point diametrically opposite `self`.
    #[inline]
    pub fn antipode(self) -> SpherePoint {
        SpherePoint {
            c: [-self.c[0], -self.c[1], -self.c[2]],
        }
    }

    /// Uniform random point on S² (Gaussian method).
    ///
    /// Three standard-normal draws are normalized; near-zero resultants
    /// are rejected and redrawn so the output is never degenerate.
    pub fn random(rng: &mut StatRng) -> SpherePoint {
        loop {
            let v = [rng.normal(), rng.normal(), rng.normal()];
            if vnorm3(v) >= EPSILON_NORM {
                return SpherePoint::from_cartesian(v);
            }
        }
    }
}

/// Rejection threshold for the Gaussian sphere-point draw.
const EPSILON_NORM: f64 = f64::EPSILON;

impl std::fmt::Display for SpherePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lat, lon) = self.geographic();
        write!(f, "({lat:.6}, {lon:.6})")
    }
}
