//! # Kepler orbit step
//!
//! Angle normalization and the mean anomaly → true anomaly step of the orbit solver.
//!
//! The true anomaly computation is a strategy ([`TrueAnomalySolver`]) so that the default
//! single-step approximation ([`FirstOrderKepler`]) can be swapped for a converged solver
//! ([`NewtonKepler`]) without touching the rest of the pipeline.
use std::fmt::Debug;

use crate::constants::{AstronomicalUnit, Degree, Radian, DPI};

/// Reduce an arbitrary angle (radians) into `[0, 2π)`.
///
/// Negative inputs wrap (−π/2 → 3π/2) instead of being truncated.
pub fn principal_angle(a: Radian) -> Radian {
    let r = a.rem_euclid(DPI);
    // tiny negative inputs round up to exactly 2π
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Reduce an arbitrary angle (degrees) into `[0, 360)`.
pub fn principal_degrees(a: Degree) -> Degree {
    let r = a.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Signed difference `a − b` folded into `[-π, π)`.
pub fn angle_diff(a: Radian, b: Radian) -> Radian {
    let mut diff = principal_angle(a) - principal_angle(b);
    if diff >= std::f64::consts::PI {
        diff -= DPI;
    } else if diff < -std::f64::consts::PI {
        diff += DPI;
    }
    diff
}

/// Strategy turning a mean anomaly into a true anomaly.
pub trait TrueAnomalySolver: Debug + Send + Sync {
    /// True anomaly in `[0, 2π)` for the mean anomaly `mean_anomaly` (radians) of an
    /// elliptic orbit of eccentricity `eccentricity` (`0 ≤ e < 1`).
    fn true_anomaly(&self, mean_anomaly: Radian, eccentricity: f64) -> Radian;
}

/// Single-step approximation of Kepler's equation.
///
/// The eccentric anomaly is taken as `E ≈ M + e·sin(M)·(1 + e·cos(M))` with no iteration, then
/// converted through `V = 2·atan(sqrt((1+e)/(1-e))·tan(E/2))`. The error grows like `e³`, which
/// is fine for the planets but noticeable for Mercury and Pluto.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FirstOrderKepler;

impl TrueAnomalySolver for FirstOrderKepler {
    fn true_anomaly(&self, mean_anomaly: Radian, eccentricity: f64) -> Radian {
        let m = mean_anomaly;
        let e = eccentricity;

        let ecc_anomaly = m + e * m.sin() * (1.0 + e * m.cos());
        let v = 2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (0.5 * ecc_anomaly).tan()).atan();

        principal_angle(v)
    }
}

/// Newton–Raphson solution of `E − e·sin(E) = M`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonKepler {
    pub tolerance: f64,
    pub max_iter: usize,
}

impl Default for NewtonKepler {
    fn default() -> Self {
        NewtonKepler {
            tolerance: 1e-12,
            max_iter: 50,
        }
    }
}

impl NewtonKepler {
    /// Eccentric anomaly of `mean_anomaly`, iterated until the correction drops below `tolerance`.
    pub fn eccentric_anomaly(&self, mean_anomaly: Radian, eccentricity: f64) -> Radian {
        let m = principal_angle(mean_anomaly);
        let e = eccentricity;

        // starting at π avoids the slow start of E0 = M for high eccentricities
        let mut ecc_anomaly = if e > 0.8 { std::f64::consts::PI } else { m };

        for _ in 0..self.max_iter {
            let f = ecc_anomaly - e * ecc_anomaly.sin() - m;
            let df = 1.0 - e * ecc_anomaly.cos();
            let delta = f / df;
            ecc_anomaly -= delta;
            if delta.abs() < self.tolerance {
                break;
            }
        }
        ecc_anomaly
    }
}

impl TrueAnomalySolver for NewtonKepler {
    fn true_anomaly(&self, mean_anomaly: Radian, eccentricity: f64) -> Radian {
        let e = eccentricity;
        let half = 0.5 * self.eccentric_anomaly(mean_anomaly, e);

        let v = 2.0 * ((1.0 + e).sqrt() * half.sin()).atan2((1.0 - e).sqrt() * half.cos());
        principal_angle(v)
    }
}

/// Heliocentric distance on the ellipse: `a·(1 − e²) / (1 + e·cos(V))`.
pub fn orbital_radius(
    mean_distance: AstronomicalUnit,
    eccentricity: f64,
    true_anomaly: Radian,
) -> AstronomicalUnit {
    mean_distance * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * true_anomaly.cos())
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    const ARCMIN: f64 = PI / (180.0 * 60.0);

    #[test]
    fn test_principal_angle_wraps_negative() {
        assert_abs_diff_eq!(principal_angle(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-15);
        assert_abs_diff_eq!(principal_angle(5.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(principal_angle(0.0), 0.0);
        assert_eq!(principal_angle(DPI), 0.0);
        assert_eq!(principal_angle(-1e-18), 0.0);
    }

    #[test]
    fn test_principal_angle_range_and_congruence() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..10_000 {
            let x: f64 = rng.random_range(-1.0e4..1.0e4);
            let r = principal_angle(x);
            assert!((0.0..DPI).contains(&r), "{x} -> {r}");

            let turns = ((x - r) / DPI).round();
            assert_abs_diff_eq!(x - r, turns * DPI, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_principal_degrees() {
        assert_abs_diff_eq!(principal_degrees(-30.0), 330.0, epsilon = 1e-12);
        assert_abs_diff_eq!(principal_degrees(725.0), 5.0, epsilon = 1e-12);
        assert_eq!(principal_degrees(360.0), 0.0);
        assert_eq!(principal_degrees(-1e-15), 0.0);
    }

    #[test]
    fn test_angle_diff() {
        assert_abs_diff_eq!(angle_diff(0.1, DPI - 0.1), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_diff(DPI - 0.1, 0.1), -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_circular_orbit_is_uniform() {
        let solver = FirstOrderKepler;
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let m: f64 = rng.random_range(0.0..DPI);
            let v = solver.true_anomaly(m, 1e-6);
            assert!(angle_diff(v, m).abs() < 1.0 * ARCMIN);

            let v = solver.true_anomaly(m, 0.0);
            assert_abs_diff_eq!(angle_diff(v, m), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_first_order_matches_newton_for_earth() {
        let first = FirstOrderKepler;
        let newton = NewtonKepler::default();
        let e = 0.01671022;
        for i in 0..360 {
            let m = (i as f64).to_radians();
            let diff = angle_diff(first.true_anomaly(m, e), newton.true_anomaly(m, e));
            assert!(diff.abs() < 1e-5, "M = {i}°: diff = {diff}");
        }
    }

    #[test]
    fn test_newton_solves_kepler_equation() {
        let solver = NewtonKepler::default();
        for &e in &[0.0, 0.2056, 0.2488, 0.6, 0.95] {
            for i in 0..36 {
                let m = (i as f64 * 10.0).to_radians();
                let ecc = solver.eccentric_anomaly(m, e);
                assert_abs_diff_eq!(ecc - e * ecc.sin(), m, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_true_anomaly_range() {
        let solver = FirstOrderKepler;
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5000 {
            let m: f64 = rng.random_range(0.0..DPI);
            let e: f64 = rng.random_range(0.0..0.3);
            let v = solver.true_anomaly(m, e);
            assert!((0.0..DPI).contains(&v));
        }
    }

    #[test]
    fn test_orbital_radius() {
        assert_abs_diff_eq!(orbital_radius(1.0, 0.0, 1.234), 1.0, epsilon = 1e-15);
        // perihelion and aphelion
        assert_abs_diff_eq!(orbital_radius(2.0, 0.5, 0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(orbital_radius(2.0, 0.5, PI), 3.0, epsilon = 1e-12);
    }
}
