//! Unit tests for s2-core primitives.

#[cfg(test)]
mod numeric {
    use crate::numeric::{accu_dot, accu_sum, sin_cos_deg, vhat3, vmean3, vmedian3, vnorm3};
    use crate::SymMatrix;

    #[test]
    fn compensated_sum_survives_cancellation() {
        // naive summation of these loses the 1.0 entirely
        let xs = [1.0e16, 1.0, -1.0e16];
        assert_eq!(accu_sum(xs.len(), |i| xs[i]), 1.0);
    }

    #[test]
    fn compensated_sum_empty() {
        assert_eq!(accu_sum(0, |_| unreachable!()), 0.0);
    }

    #[test]
    fn dot_matches_naive_on_benign_input() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let d = accu_dot(4, |i| a[i], |i| b[i]);
        assert!((d - 70.0).abs() < 1e-12);
    }

    #[test]
    fn vhat3_normalizes_and_canonicalizes_zero() {
        let u = vhat3([3.0, 0.0, 4.0]);
        assert!((vnorm3(u) - 1.0).abs() < 1e-15);
        assert!((u[0] - 0.6).abs() < 1e-15);
        assert_eq!(vhat3([0.0, 0.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn mean_of_square_corners_is_center() {
        let pts = [
            [1.0, 1.0, 0.0],
            [1.0, -1.0, 0.0],
            [-1.0, 1.0, 0.0],
            [-1.0, -1.0, 0.0],
        ];
        assert_eq!(vmean3(&pts), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn median_of_square_corners_is_center() {
        let pts = [
            [1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, -1.0, 0.0],
        ];
        let m = vmedian3(&pts);
        assert!(vnorm3(m) < 1e-12, "got {m:?}");
    }

    #[test]
    fn median_of_collinear_points_is_middle_point() {
        let pts = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [10.0, 0.0, 0.0]];
        let m = vmedian3(&pts);
        assert!((m[0] - 1.0).abs() < 1e-3, "got {m:?}");
        assert!(m[1].abs() < 1e-9 && m[2].abs() < 1e-9);
    }

    #[test]
    fn median_of_identical_points_is_that_point() {
        let pts = [[0.5, -0.5, 2.0]; 7];
        assert_eq!(vmedian3(&pts), [0.5, -0.5, 2.0]);
    }

    #[test]
    fn sin_cos_deg_exact_at_quadrants() {
        assert_eq!(sin_cos_deg(0.0), (0.0, 1.0));
        assert_eq!(sin_cos_deg(90.0), (1.0, 0.0));
        assert_eq!(sin_cos_deg(180.0), (0.0, -1.0));
        assert_eq!(sin_cos_deg(-90.0), (-1.0, 0.0));
        // reduction: 450° ≡ 90°
        assert_eq!(sin_cos_deg(450.0), (1.0, 0.0));
    }

    #[test]
    fn sin_cos_deg_general_angle() {
        let (s, c) = sin_cos_deg(30.0);
        assert!((s - 0.5).abs() < 1e-15);
        assert!((c - 3f64.sqrt() / 2.0).abs() < 1e-15);
    }

    #[test]
    fn sym_matrix_symmetry_and_zero_diagonal() {
        let mut m = SymMatrix::new(4);
        m.set(0, 3, 2.5);
        m.set(2, 1, 1.5);
        assert_eq!(m.get(0, 3), 2.5);
        assert_eq!(m.get(3, 0), 2.5);
        assert_eq!(m.get(1, 2), 1.5);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
        }
        assert_eq!(m.dim(), 4);
    }

    #[test]
    #[should_panic(expected = "diagonal")]
    fn sym_matrix_rejects_diagonal_writes() {
        SymMatrix::new(3).set(1, 1, 1.0);
    }
}

#[cfg(test)]
mod point {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{S2Error, SpherePoint, StatRng};

    #[test]
    fn geographic_roundtrip() {
        for &(lat, lon) in &[
            (0.0, 0.0),
            (30.694, -88.043),
            (-45.0, 120.0),
            (89.0, 179.5),
            (-89.9, -179.9),
        ] {
            let p = SpherePoint::from_geographic(lat, lon).unwrap();
            let (lat2, lon2) = p.geographic();
            assert!((lat - lat2).abs() < 1e-12, "lat {lat} -> {lat2}");
            assert!((lon - lon2).abs() < 1e-12, "lon {lon} -> {lon2}");
        }
    }

    #[test]
    fn poles_roundtrip_latitude_only() {
        let p = SpherePoint::from_geographic(90.0, 123.0).unwrap();
        let (lat, _) = p.geographic();
        assert!((lat - 90.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(matches!(
            SpherePoint::from_geographic(90.5, 0.0),
            Err(S2Error::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            SpherePoint::from_geographic(0.0, -180.5),
            Err(S2Error::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn zero_vector_canonicalizes_to_pole() {
        let p = SpherePoint::from_cartesian([0.0, 0.0, 0.0]);
        assert_eq!(p, SpherePoint::NORTH_POLE);
    }

    #[test]
    fn separation_laws() {
        let p = SpherePoint::from_geographic(30.0, -88.0).unwrap();
        let q = SpherePoint::from_geographic(-10.0, 45.0).unwrap();
        assert_eq!(p.separation(p), 0.0);
        assert_eq!(p.separation(q), q.separation(p));
        assert!((p.separation(p.antipode()) - PI).abs() < 1e-15);
    }

    #[test]
    fn separation_orthogonal_is_exactly_half_pi() {
        let p = SpherePoint::from_geographic(0.0, 0.0).unwrap();
        let q = SpherePoint::from_geographic(0.0, 90.0).unwrap();
        assert_eq!(p.separation(q), FRAC_PI_2);
    }

    #[test]
    fn random_points_are_unit_and_deterministic() {
        let mut r1 = StatRng::new(7);
        let mut r2 = StatRng::new(7);
        for _ in 0..100 {
            let a = SpherePoint::random(&mut r1);
            let b = SpherePoint::random(&mut r2);
            assert_eq!(a, b);
            let [x, y, z] = a.cartesian();
            let norm = (x * x + y * y + z * z).sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::StatRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = StatRng::new(12345);
        let mut r2 = StatRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(), r2.uniform());
        }
    }

    #[test]
    fn sentinel_zero_uses_time_nonzero_is_verbatim() {
        let mut fixed = StatRng::from_seed_or_time(99);
        let mut same = StatRng::new(99);
        assert_eq!(fixed.uniform(), same.uniform());
    }

    #[test]
    fn uniform_in_unit_interval() {
        let mut rng = StatRng::new(1);
        for _ in 0..1000 {
            let u = rng.uniform();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn index_in_bounds() {
        let mut rng = StatRng::new(2);
        for _ in 0..1000 {
            assert!(rng.index(17) < 17);
        }
    }

    #[test]
    fn normal_draws_are_finite() {
        let mut rng = StatRng::new(3);
        for _ in 0..1000 {
            assert!(rng.normal().is_finite());
        }
    }
}
