//! # Low-precision lunar model
//!
//! Closed-form geocentric Moon position (about a degree of accuracy), independent of the
//! orbital element table and of the Kepler step. Three mean arguments, each linear in the
//! days elapsed since J2000.0, give the ecliptic longitude, latitude and distance:
//!
//! ```text
//! L = 218.316° + 13.176396°·d     mean longitude
//! M = 134.963° + 13.064993°·d     mean anomaly
//! F =  93.272° + 13.229350°·d     mean distance from the ascending node
//!
//! λ = L + 6.289°·sin(M)
//! β = 5.128°·sin(F)
//! Δ = 385001 − 20905·cos(M)  km
//! ```
//!
//! The ecliptic direction then goes through the same obliquity rotation as the planets.
use nalgebra::Vector3;

use crate::{
    constants::{Days, Kilometer, Radian, AU, LUNAR_OBLIQUITY, RADEG},
    kepler::principal_angle,
    ref_system::{
        ecliptic_spherical_to_rectangular, ecliptic_to_equatorial, EquatorialCoordinates,
    },
};

/// Geocentric ecliptic position of the Moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub ecliptic_longitude: Radian,
    pub ecliptic_latitude: Radian,
    pub distance: Kilometer,
}

impl LunarPosition {
    /// Ecliptic rectangular coordinates in AU.
    pub fn to_rectangular(&self) -> Vector3<f64> {
        ecliptic_spherical_to_rectangular(
            self.ecliptic_longitude,
            self.ecliptic_latitude,
            self.distance / AU,
        )
    }
}

/// Ecliptic position of the Moon `d` days after J2000.0.
pub fn lunar_position(d: Days) -> LunarPosition {
    let mean_longitude = RADEG * (218.316 + 13.176396 * d);
    let mean_anomaly = RADEG * (134.963 + 13.064993 * d);
    let mean_node_distance = RADEG * (93.272 + 13.229350 * d);

    LunarPosition {
        ecliptic_longitude: principal_angle(mean_longitude + RADEG * 6.289 * mean_anomaly.sin()),
        ecliptic_latitude: RADEG * 5.128 * mean_node_distance.sin(),
        distance: 385001.0 - 20905.0 * mean_anomaly.cos(),
    }
}

/// Equatorial coordinates of the Moon `d` days after J2000.0, distance in AU.
pub fn moon_equatorial(d: Days) -> EquatorialCoordinates {
    let ecliptic = lunar_position(d).to_rectangular();
    EquatorialCoordinates::from_rectangular(&ecliptic_to_equatorial(&ecliptic, LUNAR_OBLIQUITY))
}
