//! # Heliocentric and geocentric positions
//!
//! Orbit solver proper: from [`OrbitalElements`] to rectangular ecliptic coordinates centered
//! on the Sun, then on the Earth, then rotated into the equatorial frame.
//!
//! ## Pipeline
//!
//! ```text
//! elements(T) ──► M = λ − ϖ ──► V (TrueAnomalySolver) ──► r = a(1−e²)/(1+e·cos V)
//!      │
//!      └────────► (x, y, z)_helio ── − (x, y, 0)_earth ──► (x, y, z)_geo
//!                                                              │
//!                                      rotate by ε (J2000) ◄───┘
//!                                                              │
//!                                               (RA, Dec, distance)
//! ```
//!
//! The Sun is the origin of the heliocentric frame: its position is pinned to `(0, 0, 0)`
//! whatever its (Earth-shared) elements say. Earth's orbit lies in the ecliptic by
//! definition, so its `z` is always zero.
use log::trace;
use nalgebra::Vector3;

use crate::{
    bodies::CelestialBody,
    constants::{Centuries, OBLIQUITY_J2000},
    kepler::{orbital_radius, TrueAnomalySolver},
    orbital_elements::{earth_elements, elements_for, OrbitalElements},
    ref_system::{ecliptic_to_equatorial, EquatorialCoordinates},
    skydome_errors::SkydomeError,
};

/// Heliocentric ecliptic rectangular coordinates (AU) of a body following `elements`.
///
/// ```text
/// u = V + ϖ − Ω
/// x = r·(cos Ω·cos u − sin Ω·sin u·cos i)
/// y = r·(sin Ω·cos u + cos Ω·sin u·cos i)
/// z = r·sin u·sin i
/// ```
pub fn orbit_position(elements: &OrbitalElements, solver: &dyn TrueAnomalySolver) -> Vector3<f64> {
    let v = solver.true_anomaly(elements.mean_anomaly(), elements.eccentricity);
    let r = orbital_radius(elements.mean_distance, elements.eccentricity, v);

    let node = elements.ascending_node_longitude;
    let u = v + elements.periapsis_longitude - node;
    let (sin_node, cos_node) = node.sin_cos();
    let (sin_u, cos_u) = u.sin_cos();
    let (sin_i, cos_i) = elements.inclination.sin_cos();

    Vector3::new(
        r * (cos_node * cos_u - sin_node * sin_u * cos_i),
        r * (sin_node * cos_u + cos_node * sin_u * cos_i),
        r * (sin_u * sin_i),
    )
}

/// Heliocentric position of `body`; the Sun is always the origin.
pub fn heliocentric_position(
    body: CelestialBody,
    elements: &OrbitalElements,
    solver: &dyn TrueAnomalySolver,
) -> Vector3<f64> {
    if body == CelestialBody::Sun {
        return Vector3::zeros();
    }
    orbit_position(elements, solver)
}

/// Heliocentric position of the Earth at `t` centuries since J2000, in the ecliptic plane.
pub fn earth_heliocentric_position(t: Centuries, solver: &dyn TrueAnomalySolver) -> Vector3<f64> {
    let earth = earth_elements(t);
    let v = solver.true_anomaly(earth.mean_anomaly(), earth.eccentricity);
    let r = orbital_radius(earth.mean_distance, earth.eccentricity, v);
    let lon = v + earth.periapsis_longitude;

    Vector3::new(r * lon.cos(), r * lon.sin(), 0.0)
}

/// Geocentric ecliptic rectangular coordinates (AU) of `body`.
///
/// Return
/// ------
/// * the geocentric vector, or [`SkydomeError::UnsupportedBody`] for the Moon.
pub fn geocentric_position(
    body: CelestialBody,
    t: Centuries,
    solver: &dyn TrueAnomalySolver,
) -> Result<Vector3<f64>, SkydomeError> {
    let elements = elements_for(body, t)?;
    let helio = heliocentric_position(body, &elements, solver);
    let earth = earth_heliocentric_position(t, solver);
    trace!("{body} heliocentric = {helio:?}, earth = {earth:?}");

    Ok(helio - earth)
}

/// Equatorial coordinates (RA/Dec in degrees, distance in AU) of `body` seen from the Earth.
pub fn equatorial_position(
    body: CelestialBody,
    t: Centuries,
    solver: &dyn TrueAnomalySolver,
) -> Result<EquatorialCoordinates, SkydomeError> {
    let geo = geocentric_position(body, t, solver)?;
    let eq =
        EquatorialCoordinates::from_rectangular(&ecliptic_to_equatorial(&geo, OBLIQUITY_J2000));
    trace!("{body} equatorial = {eq:?}");
    Ok(eq)
}
