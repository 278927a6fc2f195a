//! Compensated summation, 3-vector statistics, and degree-valued trig.
//!
//! # Design
//!
//! Everything here operates on plain `f64` and `[f64; 3]` so the routines
//! stay usable both for true 3-D data and for planar data embedded with
//! z ≡ 0 (the intrinsic estimators exploit this).
//!
//! Summation uses the Neumaier variant of Kahan compensation: the running
//! error term is carried separately and folded in once at the end, which
//! keeps cancellation-heavy sums (e.g. near-antipodal samples) exact to
//! the last few ulps.

/// Floating-point tolerance used for singularity guards throughout the
/// workspace (2⁻⁵²).
pub const EPSILON: f64 = f64::EPSILON;

/// Iteration cap for the Weiszfeld loop in [`vmedian3`].
const MEDIAN_MAX_ITER: u32 = 1_000;

// ── Compensated summation ─────────────────────────────────────────────────────

/// Compensated (Neumaier) sum of `f(0) + f(1) + … + f(n-1)`.
pub fn accu_sum(n: usize, f: impl Fn(usize) -> f64) -> f64 {
    let mut sum = 0.0;
    let mut comp = 0.0;
    for i in 0..n {
        let x = f(i);
        let t = sum + x;
        if sum.abs() >= x.abs() {
            comp += (sum - t) + x;
        } else {
            comp += (x - t) + sum;
        }
        sum = t;
    }
    sum + comp
}

/// Compensated dot product `Σ f(i)·g(i)` over `0..n`.
///
/// Each product is split into its rounded value and an FMA-recovered
/// error term; both streams go through the compensated accumulator.
pub fn accu_dot(n: usize, f: impl Fn(usize) -> f64, g: impl Fn(usize) -> f64) -> f64 {
    let mut sum = 0.0;
    let mut comp = 0.0;
    let mut add = |x: f64| {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            comp += (sum - t) + x;
        } else {
            comp += (x - t) + sum;
        }
        sum = t;
    };
    for i in 0..n {
        let (a, b) = (f(i), g(i));
        let p = a * b;
        add(p);
        add(a.mul_add(b, -p));
    }
    sum + comp
}

// ── 3-vector statistics ───────────────────────────────────────────────────────

/// Euclidean norm of a 3-vector.
#[inline]
pub fn vnorm3(v: [f64; 3]) -> f64 {
    v[0].hypot(v[1]).hypot(v[2])
}

/// Normalize a 3-vector to unit length.  The all-zero vector maps to the
/// canonical pole `(0, 0, 1)` instead of producing NaN.
pub fn vhat3(v: [f64; 3]) -> [f64; 3] {
    let r = vnorm3(v);
    if r == 0.0 {
        return [0.0, 0.0, 1.0];
    }
    [v[0] / r, v[1] / r, v[2] / r]
}

/// Componentwise compensated mean of a set of 3-vectors.
///
/// Returns the zero vector for an empty slice.
pub fn vmean3(points: &[[f64; 3]]) -> [f64; 3] {
    let n = points.len();
    if n == 0 {
        return [0.0; 3];
    }
    let nf = n as f64;
    [
        accu_sum(n, |i| points[i][0]) / nf,
        accu_sum(n, |i| points[i][1]) / nf,
        accu_sum(n, |i| points[i][2]) / nf,
    ]
}

/// Geometric median of a set of 3-vectors (Weiszfeld iteration).
///
/// Seeded at the componentwise mean.  Data-point collisions are handled
/// with the Vardi–Zhang correction, so the iteration is total: it never
/// divides by a zero distance.  Returns the zero vector for an empty slice.
pub fn vmedian3(points: &[[f64; 3]]) -> [f64; 3] {
    if points.is_empty() {
        return [0.0; 3];
    }
    let mut y = vmean3(points);
    for _ in 0..MEDIAN_MAX_ITER {
        let mut num = [0.0f64; 3];
        let mut denom = 0.0f64;
        // Residual direction of the non-coincident points; drives the
        // Vardi–Zhang step when `y` sits exactly on a data point.
        let mut resid = [0.0f64; 3];
        let mut hits = 0usize;
        for p in points {
            let d = vnorm3([p[0] - y[0], p[1] - y[1], p[2] - y[2]]);
            if d < EPSILON {
                hits += 1;
                continue;
            }
            let w = 1.0 / d;
            for k in 0..3 {
                num[k] += p[k] * w;
                resid[k] += (p[k] - y[k]) * w;
            }
            denom += w;
        }
        if denom == 0.0 {
            // every point coincides with the current estimate
            return y;
        }
        let t = [num[0] / denom, num[1] / denom, num[2] / denom];
        let next = if hits == 0 {
            t
        } else {
            let r = vnorm3(resid);
            if r < EPSILON {
                // `y` is a data point and the pulls of the others cancel:
                // it is the median
                return y;
            }
            let g = ((hits as f64) / r).min(1.0);
            [
                (1.0 - g) * t[0] + g * y[0],
                (1.0 - g) * t[1] + g * y[1],
                (1.0 - g) * t[2] + g * y[2],
            ]
        };
        let step = vnorm3([next[0] - y[0], next[1] - y[1], next[2] - y[2]]);
        y = next;
        if step <= EPSILON {
            break;
        }
    }
    y
}

// ── Degree-valued trigonometry ────────────────────────────────────────────────

/// Paired sine and cosine of an angle given in degrees.
///
/// The argument is reduced into (−180, 180] before conversion to radians,
/// and quadrant boundaries (0, ±90, 180) return exact values so cardinal
/// directions round-trip bit-exactly.
pub fn sin_cos_deg(deg: f64) -> (f64, f64) {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    if d == 0.0 {
        return (0.0, 1.0);
    } else if d == 90.0 {
        return (1.0, 0.0);
    } else if d == 180.0 {
        return (0.0, -1.0);
    } else if d == -90.0 {
        return (-1.0, 0.0);
    }
    let r = d.to_radians();
    (r.sin(), r.cos())
}

// ── SymMatrix ─────────────────────────────────────────────────────────────────

/// Symmetric n×n matrix with an implicit zero diagonal, storing only the
/// upper triangle (n(n−1)/2 values).
///
/// Built fresh for one medoid query, consumed, and dropped — never cached
/// across calls or shared between threads.
pub struct SymMatrix {
    n: usize,
    upper: Vec<f64>,
}

impl SymMatrix {
    /// Zero-filled n×n symmetric matrix.
    pub fn new(n: usize) -> Self {
        let len = n * n.saturating_sub(1) / 2;
        SymMatrix {
            n,
            upper: vec![0.0; len],
        }
    }

    /// Matrix dimension n.
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Position of (i, j), i < j, inside the packed upper triangle.
    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        i * (2 * self.n - i - 1) / 2 + (j - i - 1)
    }

    /// Entry (i, j).  The diagonal is identically zero.
    ///
    /// # Panics
    /// Panics when `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "SymMatrix index out of bounds");
        match i.cmp(&j) {
            std::cmp::Ordering::Less => self.upper[self.offset(i, j)],
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => self.upper[self.offset(j, i)],
        }
    }

    /// Set entry (i, j) — and, implicitly, (j, i).
    ///
    /// # Panics
    /// Panics when `i == j` (the diagonal is fixed at zero) or when an
    /// index is out of bounds.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i != j, "SymMatrix diagonal is fixed at zero");
        assert!(i < self.n && j < self.n, "SymMatrix index out of bounds");
        let idx = if i < j {
            self.offset(i, j)
        } else {
            self.offset(j, i)
        };
        self.upper[idx] = value;
    }
}
