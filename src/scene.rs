//! # Scene placement helpers
//!
//! Rendering-side conveniences that share the engine's unit contract (AU in, scene units
//! out). Nothing here is astronomy: these functions turn a [`HorizontalCoordinates`] into a
//! point of a 3D scene and a catalog magnitude into an emissive intensity.
//!
//! ## Scene frame
//!
//! ```text
//!        +y (zenith)
//!         │   +z (north)
//!         │  /
//!         │ /
//!         └──────── +x (east)
//! ```
//!
//! The "away" vector `(0, 0, 1)` points north on the horizon. It is tilted up by the
//! altitude (rotation of −alt about `x`), swung by the azimuth (rotation about `y`), then
//! scaled by the distance.
use nalgebra::{Rotation3, Vector3};

use crate::{
    constants::{Degree, RADEG},
    horizontal::HorizontalCoordinates,
};

/// Affine remap of `value` from `[in_min, in_max]` to `[out_min, out_max]`, without clamping.
///
/// A degenerate input range (`in_min == in_max`) maps everything to `out_min`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_min == in_max {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Scene position of a target seen at `altitude`/`azimuth` (degrees) and `distance` scene units.
pub fn placement_vector(altitude: Degree, azimuth: Degree, distance: f64) -> Vector3<f64> {
    let tilt = Rotation3::from_axis_angle(&Vector3::x_axis(), -altitude * RADEG);
    let swing = Rotation3::from_axis_angle(&Vector3::y_axis(), azimuth * RADEG);
    swing * tilt * Vector3::new(0.0, 0.0, distance)
}

/// Scene position of a horizontal coordinate; an undefined azimuth is placed due north.
pub fn horizontal_to_scene(horizontal: &HorizontalCoordinates, distance: f64) -> Vector3<f64> {
    placement_vector(horizontal.altitude, horizontal.azimuth_or_north(), distance)
}

/// Emissive intensity of a star: brighter (lower) magnitudes give larger values,
/// never below `min_brightness`.
pub fn magnitude_to_brightness(magnitude: f64, reference: f64, min_brightness: f64) -> f64 {
    (reference - magnitude).max(min_brightness)
}
