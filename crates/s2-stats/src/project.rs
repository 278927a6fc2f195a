//! Azimuthal-equidistant tangent-plane projection.
//!
//! # Role
//!
//! This pair is the bridge that lets planar (Euclidean) mean/median
//! algorithms be reused for spherical data: the projection centered at a
//! point is locally isometric there and preserves the true angular
//! distance from the center along every radial direction.  The intrinsic
//! estimators project the sample, average in the plane, and map the result
//! back — exact to first order per refinement step.
//!
//! # Singularities
//!
//! The forward map's scale factor c/sin(c) is a 0/0 form at c = 0; it is
//! clamped to 1 below [`EPSILON`].  The inverse map returns the center
//! unchanged when the planar radius is below [`EPSILON`], avoiding a
//! division by a near-zero radius.

use s2_core::numeric::sin_cos_deg;
use s2_core::{EPSILON, SpherePoint};

/// Forward azimuthal-equidistant projection of `p` into the plane tangent
/// at `center`.
///
/// The returned planar radius √(x²+y²) equals `center.separation(p)`.
pub fn plane_coords(center: SpherePoint, p: SpherePoint) -> (f64, f64) {
    let c = center.separation(p);
    // 1/sinc(c), clamped at the removable singularity
    let kp = if c.abs() < EPSILON { 1.0 } else { c / c.sin() };

    let (lat0, lon0) = center.geographic();
    let (lat, lon) = p.geographic();
    let (sin0, cos0) = sin_cos_deg(lat0);
    let (sinl, cosl) = sin_cos_deg(lat);

    let mut del = lon - lon0;
    if del > 180.0 {
        del -= 360.0;
    } else if del < -180.0 {
        del += 360.0;
    }
    let (sind, cosd) = sin_cos_deg(del);

    let x = kp * cosl * sind;
    let y = kp * (cos0 * sinl - sin0 * cosl * cosd);
    (x, y)
}

/// Inverse azimuthal-equidistant projection: the sphere point whose
/// tangent-plane coordinates at `center` are `(x, y)`.
///
/// Exact inverse of [`plane_coords`] over the valid domain; a planar
/// radius below tolerance returns `center` unchanged.
pub fn sphere_point(center: SpherePoint, x: f64, y: f64) -> SpherePoint {
    let c = x.hypot(y);
    if c < EPSILON {
        return center;
    }

    let (lat0, lon0) = center.geographic();
    let (sin0, cos0) = sin_cos_deg(lat0);
    let (sinc, cosc) = c.sin_cos();

    // clamp: rounding can push the asin argument a few ulps past ±1
    let slat = (cosc * sin0 + y * sinc * cos0 / c).clamp(-1.0, 1.0);
    let lat = slat.asin().to_degrees();
    let mut lon = lon0 + (x * sinc).atan2(c * cos0 * cosc - y * sin0 * sinc).to_degrees();
    if lon > 180.0 {
        lon -= 360.0;
    } else if lon < -180.0 {
        lon += 360.0;
    }

    let (slat, clat) = sin_cos_deg(lat);
    let (slon, clon) = sin_cos_deg(lon);
    SpherePoint::from_cartesian([clat * clon, clat * slon, slat])
}
