use nalgebra::{Matrix3, Rotation3, Unit, Vector3};

use crate::constants::{AstronomicalUnit, Degree, Radian, RADEG};
use crate::kepler::principal_degrees;

/// Equatorial coordinates on the celestial sphere.
///
/// `distance` is `None` for catalog stars, which are treated as infinitely distant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoordinates {
    /// Right ascension in degrees, within `[0, 360)`.
    pub right_ascension: Degree,
    /// Declination in degrees, within `[-90, 90]`.
    pub declination: Degree,
    pub distance: Option<AstronomicalUnit>,
}

impl EquatorialCoordinates {
    /// Direction without distance, as supplied by a star catalog.
    pub fn direction(right_ascension: Degree, declination: Degree) -> Self {
        EquatorialCoordinates {
            right_ascension,
            declination,
            distance: None,
        }
    }

    /// Spherical coordinates of an equatorial rectangular vector.
    ///
    /// ```text
    /// RA  = atan2(y, x)              (folded into [0, 360))
    /// Dec = atan(z / sqrt(x² + y²))
    /// r   = sqrt(x² + y² + z²)
    /// ```
    pub fn from_rectangular(v: &Vector3<f64>) -> Self {
        let rho = v.x.hypot(v.y);

        EquatorialCoordinates {
            right_ascension: principal_degrees(v.y.atan2(v.x).to_degrees()),
            declination: v.z.atan2(rho).to_degrees(),
            distance: Some(v.norm()),
        }
    }
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// This function builds a [`nalgebra::Matrix3`] representing an **active rotation**
/// of a 3D vector by an angle `alpha` around the chosen axis, counter-clockwise when looking
/// along the axis toward the origin.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `axis` - Axis of rotation.
///
/// # Returns
///
/// An orthonormal matrix `R` such that the rotated vector is `x' = R · x`.
pub fn rotmt(alpha: Radian, axis: Unit<Vector3<f64>>) -> Matrix3<f64> {
    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation taking ecliptic rectangular coordinates to equatorial ones, for an obliquity
/// given in degrees.
///
/// ```text
/// x_eq = x
/// y_eq = y·cos(ε) − z·sin(ε)
/// z_eq = y·sin(ε) + z·cos(ε)
/// ```
pub fn ecliptic_to_equatorial_matrix(obliquity: Degree) -> Matrix3<f64> {
    rotmt(obliquity * RADEG, Vector3::x_axis())
}

/// Rotate an ecliptic rectangular vector into the equatorial frame.
pub fn ecliptic_to_equatorial(ecliptic: &Vector3<f64>, obliquity: Degree) -> Vector3<f64> {
    ecliptic_to_equatorial_matrix(obliquity) * ecliptic
}

/// Unit vector of ecliptic longitude `lon` and latitude `lat` (radians), scaled by `distance`.
pub fn ecliptic_spherical_to_rectangular(
    lon: Radian,
    lat: Radian,
    distance: f64,
) -> Vector3<f64> {
    Vector3::new(
        distance * lat.cos() * lon.cos(),
        distance * lat.cos() * lon.sin(),
        distance * lat.sin(),
    )
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::constants::OBLIQUITY_J2000;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rotation_matrix() {
        let rot = ecliptic_to_equatorial_matrix(OBLIQUITY_J2000);
        let (s, c) = (OBLIQUITY_J2000 * RADEG).sin_cos();
        let expected = Matrix3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c);
        assert_abs_diff_eq!(rot, expected, epsilon = 1e-15);
        assert_abs_diff_eq!(rot.transpose() * rot, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_x_axis_invariant() {
        let v = Vector3::new(1.3, 0.0, 0.0);
        assert_abs_diff_eq!(
            ecliptic_to_equatorial(&v, OBLIQUITY_J2000),
            v,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_ecliptic_pole_declination() {
        // the north ecliptic pole sits at RA 18h, Dec 90° − ε
        let pole = Vector3::new(0.0, 0.0, 1.0);
        let eq = EquatorialCoordinates::from_rectangular(&ecliptic_to_equatorial(
            &pole,
            OBLIQUITY_J2000,
        ));
        assert_abs_diff_eq!(eq.right_ascension, 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.declination, 90.0 - OBLIQUITY_J2000, epsilon = 1e-9);
        assert_abs_diff_eq!(eq.distance.unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_from_rectangular_quadrants() {
        let eq = EquatorialCoordinates::from_rectangular(&Vector3::new(0.0, -2.0, 0.0));
        assert_abs_diff_eq!(eq.right_ascension, 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.declination, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.distance.unwrap(), 2.0, epsilon = 1e-15);

        let eq = EquatorialCoordinates::from_rectangular(&Vector3::new(-1.0, 0.0, 1.0));
        assert_abs_diff_eq!(eq.right_ascension, 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.declination, 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spherical_to_rectangular() {
        let v = ecliptic_spherical_to_rectangular(90f64.to_radians(), 0.0, 2.0);
        assert_abs_diff_eq!(v, Vector3::new(0.0, 2.0, 0.0), epsilon = 1e-15);
    }
}
