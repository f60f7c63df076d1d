//! # Horizontal projection
//!
//! Equatorial (RA/Dec) → horizontal (altitude/azimuth) coordinates for an [`Observer`] at a
//! UTC instant. A single projector, [`horizontal_from_equatorial`], serves every kind of
//! target; what differs per target is only the **local sidereal time formula**, selected
//! explicitly through [`SiderealTime`]:
//!
//! | Target  | Equatorial source                          | Sidereal strategy          |
//! |---------|--------------------------------------------|----------------------------|
//! | planets | element table + Kepler step + rotation     | [`SiderealTime::Planetary`]|
//! | Moon    | closed-form lunar model ([`crate::moon`])  | [`SiderealTime::Lunar`]    |
//! | stars   | catalog RA/Dec, used as-is                 | [`SiderealTime::Stellar`]  |
//!
//! All strategies read the same `epoch`: the stellar formula takes its time-of-day term from
//! that instant, not from the wall clock.
//!
//! ## Projection
//!
//! ```text
//! HA  = LST − RA                      (+360° if negative)
//! alt = asin( sin δ·sin φ + cos δ·cos φ·cos HA )
//! az  = acos( (sin δ − sin alt·sin φ) / (cos alt·cos φ) )
//! az  = 360° − az   if sin HA > 0
//! ```
//!
//! Inverse-trigonometric arguments are clamped to `[-1, 1]`. When `|cos alt·cos φ|` falls
//! below [`AZIMUTH_GUARD_EPS`](crate::constants::AZIMUTH_GUARD_EPS) (target at the zenith or
//! nadir, observer at a pole) the azimuth is undefined and reported as `None`.
use hifitime::Epoch;
use log::trace;

use crate::{
    bodies::CelestialBody,
    constants::{AstronomicalUnit, Degree, AZIMUTH_GUARD_EPS, DEG_PER_HOUR, RADEG},
    heliocentric::equatorial_position,
    kepler::{principal_degrees, FirstOrderKepler, TrueAnomalySolver},
    moon::moon_equatorial,
    observers::Observer,
    ref_system::EquatorialCoordinates,
    skydome_errors::SkydomeError,
    time::{centuries_since_j2000, days_since_j2000, utc_hours_of_day},
};

/// Local sidereal time formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiderealTime {
    /// `280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000 + λ`
    Planetary,
    /// `280.16 + 360.9856235·d + λ`
    Lunar,
    /// `100.46 + 0.985647·d + λ + 15·UT`, reduced through hours.
    Stellar,
}

impl SiderealTime {
    /// Local sidereal time in degrees for an observer at east longitude `longitude`.
    ///
    /// Return
    /// ------
    /// * `Planetary` / `Lunar`: reduced by whole turns into `(0, 360]` for positive raw values
    ///   and `[0, 360)` otherwise.
    /// * `Stellar`: reduced to hours in `[0, 24)` then expressed back in degrees.
    pub fn local_sidereal_time(&self, longitude: Degree, epoch: &Epoch) -> Degree {
        let d = days_since_j2000(epoch);
        match self {
            SiderealTime::Planetary => {
                let t = centuries_since_j2000(epoch);
                let mst = 280.46061837 + 360.98564736629 * d + 0.000387933 * t * t
                    - t * t * t / 38710000.0
                    + longitude;
                reduce_turns(mst)
            }
            SiderealTime::Lunar => reduce_turns(280.16 + 360.9856235 * d + longitude),
            SiderealTime::Stellar => {
                let lst = 100.46
                    + 0.985647 * d
                    + longitude
                    + utc_hours_of_day(epoch) * DEG_PER_HOUR;
                fold_through_hours(lst)
            }
        }
    }
}

/// Reduce to sidereal hours in `[0, 24)` and express the result back in degrees.
fn fold_through_hours(lst: Degree) -> Degree {
    let hours = principal_degrees(lst) / DEG_PER_HOUR;
    principal_degrees(hours * DEG_PER_HOUR)
}

/// Remove whole turns the way a subtract/add-360 loop would: positive values land in
/// `(0, 360]`, the others in `[0, 360)`.
fn reduce_turns(angle: Degree) -> Degree {
    if angle > 0.0 {
        let r = angle.rem_euclid(360.0);
        if r == 0.0 {
            360.0
        } else {
            r
        }
    } else {
        principal_degrees(angle)
    }
}

/// Position of a target in the observer's horizontal frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoordinates {
    /// Height above the horizon in degrees, within `[-90, 90]`.
    pub altitude: Degree,
    /// Compass bearing in degrees from north through east, within `[0, 360)`.
    /// `None` when the target is at the zenith/nadir or the observer at a pole.
    pub azimuth: Option<Degree>,
    /// Geocentric distance in AU; `None` for stars.
    pub distance: Option<AstronomicalUnit>,
}

impl HorizontalCoordinates {
    /// Azimuth, with the undefined case mapped to the sentinel `0.0` (due north).
    pub fn azimuth_or_north(&self) -> Degree {
        self.azimuth.unwrap_or(0.0)
    }

    pub fn is_azimuth_defined(&self) -> bool {
        self.azimuth.is_some()
    }
}

/// Project equatorial coordinates onto the observer's horizon.
///
/// Arguments
/// ---------
/// * `observer`: latitude/longitude of the site.
/// * `epoch`: UTC instant of the observation.
/// * `equatorial`: RA/Dec in degrees; its distance is passed through unchanged.
/// * `sidereal`: local sidereal time formula to use.
pub fn horizontal_from_equatorial(
    observer: &Observer,
    epoch: &Epoch,
    equatorial: &EquatorialCoordinates,
    sidereal: SiderealTime,
) -> HorizontalCoordinates {
    let lst = sidereal.local_sidereal_time(observer.longitude(), epoch);

    let mut hour_angle = lst - equatorial.right_ascension;
    if hour_angle < 0.0 {
        hour_angle += 360.0;
    }
    let hour_angle = hour_angle * RADEG;

    let (sin_dec, cos_dec) = (equatorial.declination * RADEG).sin_cos();
    let (sin_lat, cos_lat) = (observer.latitude() * RADEG).sin_cos();

    let altitude = (sin_dec * sin_lat + cos_dec * cos_lat * hour_angle.cos())
        .clamp(-1.0, 1.0)
        .asin();

    let denominator = altitude.cos() * cos_lat;
    let azimuth = if denominator.abs() < AZIMUTH_GUARD_EPS {
        None
    } else {
        let raw = ((sin_dec - altitude.sin() * sin_lat) / denominator)
            .clamp(-1.0, 1.0)
            .acos()
            .to_degrees();
        let az = if hour_angle.sin() > 0.0 { 360.0 - raw } else { raw };
        Some(principal_degrees(az))
    };

    trace!(
        "LST = {lst:.6}°, HA = {:.6}°, alt = {:.6}°, az = {azimuth:?}",
        hour_angle.to_degrees(),
        altitude.to_degrees()
    );

    HorizontalCoordinates {
        altitude: altitude.to_degrees(),
        azimuth,
        distance: equatorial.distance,
    }
}

/// Horizontal coordinates of the Sun or a planet, using the default single-step Kepler solver.
///
/// Return
/// ------
/// * [`SkydomeError::UnsupportedBody`] for the Moon, which has its own entry point
///   ([`horizontal_for_moon`]).
pub fn horizontal_for_planet(
    body: CelestialBody,
    observer: &Observer,
    epoch: &Epoch,
) -> Result<HorizontalCoordinates, SkydomeError> {
    horizontal_for_planet_with(body, observer, epoch, &FirstOrderKepler)
}

/// Same as [`horizontal_for_planet`], with an explicit true anomaly strategy.
pub fn horizontal_for_planet_with(
    body: CelestialBody,
    observer: &Observer,
    epoch: &Epoch,
    solver: &dyn TrueAnomalySolver,
) -> Result<HorizontalCoordinates, SkydomeError> {
    let equatorial = equatorial_position(body, centuries_since_j2000(epoch), solver)?;
    Ok(horizontal_from_equatorial(
        observer,
        epoch,
        &equatorial,
        SiderealTime::Planetary,
    ))
}

/// Horizontal coordinates of the Moon from the closed-form lunar model (distance in AU).
pub fn horizontal_for_moon(observer: &Observer, epoch: &Epoch) -> HorizontalCoordinates {
    let equatorial = moon_equatorial(days_since_j2000(epoch));
    horizontal_from_equatorial(observer, epoch, &equatorial, SiderealTime::Lunar)
}

/// Horizontal coordinates of a star of catalog right ascension `ra` and declination `dec`
/// (both degrees). Stars are infinitely distant: `distance` is always `None`.
pub fn horizontal_for_star(
    observer: &Observer,
    epoch: &Epoch,
    ra: Degree,
    dec: Degree,
) -> HorizontalCoordinates {
    horizontal_from_equatorial(
        observer,
        epoch,
        &EquatorialCoordinates::direction(ra, dec),
        SiderealTime::Stellar,
    )
}
