//! Sphere point-set generators and their equidistribution measure.
//!
//! Generators feed test and input samples to the estimators; none of the
//! estimation algorithms call them internally.
//!
//! References: Swinbank & Purser, "Fibonacci grids: A novel approach to
//! global modelling", Q.J.R. Meteorol. Soc. 132:1769–1793 (2006);
//! Cui & Freeden, "Equidistribution on the sphere", SIAM J. Sci. Comput.
//! 18(2):595–609 (1997).

use std::f64::consts::{PI, TAU};

use s2_core::{SpherePoint, StatRng};

use crate::error::{StatsError, StatsResult};

/// Golden ratio (1 + √5)/2, the Fibonacci lattice's longitude stride.
const PHI: f64 = 1.618033988749894848204586834365638118;

// ── Global generators ─────────────────────────────────────────────────────────

/// Quasi-uniform Fibonacci point set of 2n+1 points covering S².
pub fn fibonacci(n: usize) -> Vec<SpherePoint> {
    let m = n as i64;
    let n21 = (2 * n + 1) as f64;
    let mut points = Vec::with_capacity(2 * n + 1);
    for i in -m..=m {
        let fi = i as f64;
        let sin_lat = 2.0 * fi / n21;
        let cos_lat = ((1.0 - sin_lat) * (1.0 + sin_lat)).sqrt();
        let lambda = (TAU / PHI) * fi;
        let (sin_lon, cos_lon) = lambda.sin_cos();
        points.push(SpherePoint::from_cartesian([
            cos_lat * cos_lon,
            cos_lat * sin_lon,
            sin_lat,
        ]));
    }
    points
}

// ── 1°×1° grid-cell samplers ──────────────────────────────────────────────────

/// Validate an integer-degree cell corner: lat ∈ [−90, 89], lon ∈ [−180, 179].
fn check_cell(lat: i32, lon: i32) -> StatsResult<()> {
    if (-90..90).contains(&lat) && (-180..180).contains(&lon) {
        Ok(())
    } else {
        Err(StatsError::CellOutOfRange { lat, lon })
    }
}

/// Cylindrical equal-area projection centered at (lat0, lon0), degrees in,
/// plane coordinates out.
fn cyl_eq_area(lat0: f64, lon0: f64, lat: f64, lon: f64) -> (f64, f64) {
    let cos0 = (lat0.to_radians()).cos();
    let x = (lon - lon0).to_radians() * cos0;
    let y = (lat.to_radians()).sin() / cos0;
    (x, y)
}

/// Inverse cylindrical equal-area projection.
fn cyl_eq_area_inv(lat0: f64, lon0: f64, x: f64, y: f64) -> (f64, f64) {
    let cos0 = (lat0.to_radians()).cos();
    let lat = (y * cos0).asin().to_degrees();
    let lon = (x / cos0).to_degrees() + lon0;
    (lat, lon)
}

/// `n` uniform pseudo-random points inside the geographic grid cell
/// [lat, lat+1] × [lon, lon+1].
///
/// Uniformity on the sphere comes from drawing in the cylindrical
/// equal-area plane of the cell and inverting the projection.
///
/// # Errors
/// [`StatsError::CellOutOfRange`] when lat ∉ [−90, 89] or lon ∉ [−180, 179].
pub fn cell_uniform(
    lat: i32,
    lon: i32,
    n: usize,
    rng: &mut StatRng,
) -> StatsResult<Vec<SpherePoint>> {
    check_cell(lat, lon)?;
    let (lat_min, lat_max) = (f64::from(lat), f64::from(lat + 1));
    let (lon_min, lon_max) = (f64::from(lon), f64::from(lon + 1));
    let lat0 = lat_min + 0.5;
    let lon0 = lon_min + 0.5;
    // cell boundary in the equal-area plane
    let (x_min, y_min) = cyl_eq_area(lat0, lon0, lat_min, lon_min);
    let (x_max, y_max) = cyl_eq_area(lat0, lon0, lat_max, lon_max);
    let (dx, dy) = (x_max - x_min, y_max - y_min);

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let x = rng.uniform() * dx + x_min;
        let y = rng.uniform() * dy + y_min;
        let (plat, plon) = cyl_eq_area_inv(lat0, lon0, x, y);
        points.push(SpherePoint::from_geographic(plat, plon)?);
    }
    Ok(points)
}

/// Approximately `n` Fibonacci points inside the geographic grid cell
/// [lat, lat+1] × [lon, lon+1] — the global lattice sized so the cell's
/// share is ≈ n, then filtered to the cell.
///
/// # Errors
/// [`StatsError::CellOutOfRange`] when lat ∉ [−90, 89] or lon ∉ [−180, 179].
pub fn cell_fibonacci(lat: i32, lon: i32, n: usize) -> StatsResult<Vec<SpherePoint>> {
    check_cell(lat, lon)?;
    let (lat_min, lat_max) = (f64::from(lat), f64::from(lat + 1));
    let (lon_min, lon_max) = (f64::from(lon), f64::from(lon + 1));

    // scale the global lattice by the sphere-to-cell area ratio
    const SPHERE_AREA: f64 = 4.0 * PI;
    let cell_area =
        (PI / 180.0) * (lat_max.to_radians().sin() - lat_min.to_radians().sin()).abs();
    let total = ((n as f64) * SPHERE_AREA / cell_area).ceil() as i64;
    let m = total / 2;
    let m21 = (2 * m + 1) as f64;

    let mut points = Vec::with_capacity(n);
    for i in -m..=m {
        let fi = i as f64;
        let sin_lat = 2.0 * fi / m21;
        let cos_lat = ((1.0 - sin_lat) * (1.0 + sin_lat)).sqrt();
        let lat_deg = sin_lat.atan2(cos_lat).to_degrees();
        if !(lat_min < lat_deg && lat_deg < lat_max) {
            continue;
        }
        let lambda = (TAU / PHI) * fi;
        let (sin_lon, cos_lon) = lambda.sin_cos();
        let lon_deg = sin_lon.atan2(cos_lon).to_degrees();
        if !(lon_min < lon_deg && lon_deg < lon_max) {
            continue;
        }
        points.push(SpherePoint::from_cartesian([
            cos_lat * cos_lon,
            cos_lat * sin_lon,
            sin_lat,
        ]));
    }
    Ok(points)
}

// ── Equidistribution measure ──────────────────────────────────────────────────

/// Generalized (Cui–Freeden) discrepancy of a point set: 0 for perfectly
/// equidistributed sets, larger for clustered ones.  Used to sanity-check
/// generator output, not inside any estimator.
pub fn discrepancy(points: &[SpherePoint]) -> f64 {
    const SQRT_PI: f64 = 1.77245385090551602729816748334114518;
    let n = points.len();
    let log_term = |i: usize, j: usize| -> f64 {
        let u = points[i].cartesian();
        let v = points[j].cartesian();
        let dot = (u[0] * v[0] + u[1] * v[1] + u[2] * v[2]).clamp(-1.0, 1.0);
        (1.0 + ((1.0 - dot) / 2.0).sqrt()).ln()
    };

    let mut d = 0.0;
    for i in 0..n {
        for j in 0..n {
            d += 1.0 - 2.0 * log_term(i, j);
        }
    }
    d.max(0.0).sqrt() / (2.0 * SQRT_PI * n as f64)
}
