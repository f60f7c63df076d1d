//! # Orbital element table
//!
//! Low-precision mean orbital elements of the major planets, each element being an affine
//! function of the Julian centuries `T` elapsed since J2000.0:
//!
//! ```text
//! element(T) = base + rate · T
//! ```
//!
//! Angular rates are tabulated in **arcseconds per century** (the classical presentation of
//! these elements); distances in AU and eccentricities are unitless with per-century rates.
//!
//! The Sun has no orbit of its own in this heliocentric frame: it shares Earth's coefficient
//! row, and its heliocentric position is pinned to the origin downstream
//! (see [`crate::heliocentric::heliocentric_position`]).
//!
//! ## Units of [`OrbitalElements`]
//!
//! - angles: **radians**, `mean_longitude` normalized to `[0, 2π)`
//! - `mean_distance`: **AU**
//! - `eccentricity`: unitless
use std::fmt;

use log::trace;

use crate::{
    bodies::CelestialBody,
    constants::{AstronomicalUnit, Centuries, Degree, Radian, ARCSEC_PER_DEG, RADEG},
    kepler::principal_angle,
    skydome_errors::SkydomeError,
};

/// Mean orbital elements of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_longitude: Radian,
    pub mean_distance: AstronomicalUnit,
    pub eccentricity: f64,
    pub mean_longitude: Radian,
}

impl OrbitalElements {
    /// Mean anomaly `M = λ − ϖ`, normalized to `[0, 2π)`.
    pub fn mean_anomaly(&self) -> Radian {
        principal_angle(self.mean_longitude - self.periapsis_longitude)
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean orbital elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (mean distance)         = {:.8} AU",
            self.mean_distance
        )?;
        writeln!(f, "  e   (eccentricity)          = {:.8}", self.eccentricity)?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination.to_degrees()
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude.to_degrees()
        )?;
        writeln!(
            f,
            "  ϖ   (longitude of perihelion) = {:.6} rad ({:.6}°)",
            self.periapsis_longitude,
            self.periapsis_longitude.to_degrees()
        )?;
        writeln!(
            f,
            "  λ   (mean longitude)        = {:.6} rad ({:.6}°)",
            self.mean_longitude,
            self.mean_longitude.to_degrees()
        )
    }
}

/// Row of the coefficient table: `(base, rate per century)` for each element.
///
/// Angles are `(degrees, arcseconds per century)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementCoefficients {
    pub inclination: (Degree, f64),
    pub ascending_node_longitude: (Degree, f64),
    pub periapsis_longitude: (Degree, f64),
    pub mean_distance: (AstronomicalUnit, f64),
    pub eccentricity: (f64, f64),
    pub mean_longitude: (Degree, f64),
}

impl ElementCoefficients {
    /// Evaluate the row at `t` Julian centuries since J2000.
    pub fn evaluate(&self, t: Centuries) -> OrbitalElements {
        let angle = |(base, rate): (Degree, f64)| (base + rate * t / ARCSEC_PER_DEG) * RADEG;
        let linear = |(base, rate): (f64, f64)| base + rate * t;

        OrbitalElements {
            inclination: angle(self.inclination),
            ascending_node_longitude: angle(self.ascending_node_longitude),
            periapsis_longitude: angle(self.periapsis_longitude),
            mean_distance: linear(self.mean_distance),
            eccentricity: linear(self.eccentricity),
            mean_longitude: principal_angle(angle(self.mean_longitude)),
        }
    }
}

/// Key of the coefficient table. Earth's row doubles as the Sun's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementSet {
    Earth,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl ElementSet {
    pub fn coefficients(self) -> &'static ElementCoefficients {
        &ELEMENT_TABLE[self as usize]
    }
}

impl TryFrom<CelestialBody> for ElementSet {
    type Error = SkydomeError;

    fn try_from(body: CelestialBody) -> Result<Self, Self::Error> {
        match body {
            CelestialBody::Sun => Ok(ElementSet::Earth),
            CelestialBody::Mercury => Ok(ElementSet::Mercury),
            CelestialBody::Venus => Ok(ElementSet::Venus),
            CelestialBody::Mars => Ok(ElementSet::Mars),
            CelestialBody::Jupiter => Ok(ElementSet::Jupiter),
            CelestialBody::Saturn => Ok(ElementSet::Saturn),
            CelestialBody::Uranus => Ok(ElementSet::Uranus),
            CelestialBody::Neptune => Ok(ElementSet::Neptune),
            CelestialBody::Pluto => Ok(ElementSet::Pluto),
            CelestialBody::Moon => Err(SkydomeError::UnsupportedBody(body.to_string())),
        }
    }
}

/// Indexed by `ElementSet as usize`.
static ELEMENT_TABLE: [ElementCoefficients; 9] = [
    // Earth (and Sun)
    ElementCoefficients {
        inclination: (0.00005, -46.94),
        ascending_node_longitude: (-11.26064, -18228.25),
        periapsis_longitude: (102.94719, 1198.28),
        mean_distance: (1.00000011, -0.00000005),
        eccentricity: (0.01671022, -0.00003804),
        mean_longitude: (100.46435, 129597740.63),
    },
    // Mercury
    ElementCoefficients {
        inclination: (7.00487, -23.51),
        ascending_node_longitude: (48.33167, -446.30),
        periapsis_longitude: (77.45645, 573.57),
        mean_distance: (0.38709893, 0.00000066),
        eccentricity: (0.20563069, 0.00002527),
        mean_longitude: (252.25084, 538101628.29),
    },
    // Venus
    ElementCoefficients {
        inclination: (3.39471, -2.86),
        ascending_node_longitude: (76.68069, -996.89),
        periapsis_longitude: (131.53298, -108.80),
        mean_distance: (0.72333199, 0.00000092),
        eccentricity: (0.00677323, -0.00004938),
        mean_longitude: (181.97973, 210664136.06),
    },
    // Mars
    ElementCoefficients {
        inclination: (1.85061, -25.47),
        ascending_node_longitude: (49.57854, -1020.19),
        periapsis_longitude: (336.04084, 1560.78),
        mean_distance: (1.52366231, -0.00007221),
        eccentricity: (0.09341233, 0.00011902),
        mean_longitude: (355.45332, 68905103.78),
    },
    // Jupiter
    ElementCoefficients {
        inclination: (1.30530, -4.15),
        ascending_node_longitude: (100.55615, 1217.17),
        periapsis_longitude: (14.75385, 839.93),
        mean_distance: (5.20336301, 0.00060737),
        eccentricity: (0.04839266, -0.00012880),
        mean_longitude: (34.40438, 10925078.35),
    },
    // Saturn
    ElementCoefficients {
        inclination: (2.48446, 6.11),
        ascending_node_longitude: (113.71504, -1591.05),
        periapsis_longitude: (92.43194, -1948.89),
        mean_distance: (9.53707032, -0.00301530),
        eccentricity: (0.05415060, -0.00036762),
        mean_longitude: (49.94432, 4401052.95),
    },
    // Uranus
    ElementCoefficients {
        inclination: (0.76986, -2.09),
        ascending_node_longitude: (74.22988, -1681.40),
        periapsis_longitude: (170.96424, 1312.56),
        mean_distance: (19.19126393, 0.00152025),
        eccentricity: (0.04716771, -0.00019150),
        mean_longitude: (313.23218, 1542547.79),
    },
    // Neptune
    ElementCoefficients {
        inclination: (1.76917, -3.64),
        ascending_node_longitude: (131.72169, -151.25),
        periapsis_longitude: (44.97135, -844.43),
        mean_distance: (30.06896348, -0.00125196),
        eccentricity: (0.00858587, 0.00002510),
        mean_longitude: (304.88003, 786449.21),
    },
    // Pluto
    ElementCoefficients {
        inclination: (17.14175, 11.07),
        ascending_node_longitude: (110.30347, -37.33),
        periapsis_longitude: (224.06676, -132.25),
        mean_distance: (39.48168677, -0.00076912),
        eccentricity: (0.24880766, 0.00006465),
        mean_longitude: (238.92881, 522747.90),
    },
];

/// Mean orbital elements of `body` at `t` Julian centuries since J2000.
///
/// Return
/// ------
/// * the elements, or [`SkydomeError::UnsupportedBody`] for the Moon, which is not described
///   by heliocentric Keplerian elements (see [`crate::moon`]).
pub fn elements_for(body: CelestialBody, t: Centuries) -> Result<OrbitalElements, SkydomeError> {
    let set = ElementSet::try_from(body)?;
    let elements = set.coefficients().evaluate(t);
    trace!("{body} elements at T = {t:.9}: {elements:?}");
    Ok(elements)
}

/// Earth's mean orbital elements, used only as the heliocentric → geocentric subtraction term.
pub fn earth_elements(t: Centuries) -> OrbitalElements {
    ElementSet::Earth.coefficients().evaluate(t)
}

#[cfg(test)]
mod orbital_elements_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sun_elements_at_j2000() {
        let sun = elements_for(CelestialBody::Sun, 0.0).unwrap();

        assert_abs_diff_eq!(sun.inclination.to_degrees(), 0.00005, epsilon = 1e-12);
        assert_abs_diff_eq!(
            sun.ascending_node_longitude.to_degrees(),
            -11.26064,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            sun.periapsis_longitude.to_degrees(),
            102.94719,
            epsilon = 1e-12
        );
        assert_eq!(sun.mean_distance, 1.00000011);
        assert_eq!(sun.eccentricity, 0.01671022);
        assert_abs_diff_eq!(sun.mean_longitude.to_degrees(), 100.46435, epsilon = 1e-12);
    }

    #[test]
    fn test_sun_shares_earth_row() {
        for t in [-1.5, 0.0, 0.2467, 3.0] {
            assert_eq!(
                elements_for(CelestialBody::Sun, t).unwrap(),
                earth_elements(t)
            );
        }
    }

    #[test]
    fn test_moon_is_unsupported() {
        assert_eq!(
            elements_for(CelestialBody::Moon, 0.0),
            Err(SkydomeError::UnsupportedBody("Moon".into()))
        );
    }

    #[test]
    fn test_elements_are_affine_in_time() {
        let t = 0.25;
        let jupiter = elements_for(CelestialBody::Jupiter, t).unwrap();
        assert_abs_diff_eq!(
            jupiter.mean_distance,
            5.20336301 + 0.00060737 * t,
            epsilon = 1e-15
        );
        assert_abs_diff_eq!(
            jupiter.inclination.to_degrees(),
            1.30530 - 4.15 * t / 3600.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            jupiter.ascending_node_longitude.to_degrees(),
            100.55615 + 1217.17 * t / 3600.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_mean_longitude_normalized() {
        for body in CelestialBody::ALL.iter().filter(|b| b.has_orbital_elements()) {
            for t in [-2.0, -0.013, 0.0, 0.24, 1.7] {
                let el = elements_for(*body, t).unwrap();
                assert!((0.0..crate::constants::DPI).contains(&el.mean_longitude));
                assert!((0.0..crate::constants::DPI).contains(&el.mean_anomaly()));
            }
        }
    }

    #[test]
    fn test_earth_mean_motion() {
        // one Julian year moves Earth's mean longitude by ~360°
        let el0 = earth_elements(0.0);
        let el1 = earth_elements(0.01);
        let delta = crate::kepler::angle_diff(el1.mean_longitude, el0.mean_longitude);
        assert!(delta.to_degrees().abs() < 0.5);
    }
}
