//! # Planetarium parameters
//!
//! [`SkydomeParams`] gathers the tunables of the rendering side of the engine: how body
//! distances are squeezed into scene units, how far away the star sphere sits, how star
//! magnitudes become emissive intensities, and how fast the simulated clock runs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use skydome::params::SkydomeParams;
//!
//! let params = SkydomeParams::builder()
//!     .distance_out_range(1.0, 80.0)
//!     .time_speed_hours(24.0)
//!     .display_utc_offset_hours(8.0)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## See also
//!
//! * [`crate::skydome::Skydome`] – façade consuming these parameters
//! * [`crate::scene::map_range`] – distance remap driven by the two ranges
use std::cmp::Ordering::{Equal, Greater};
use std::fmt;

use crate::skydome_errors::SkydomeError;

/// Tunables of the planetarium scene.
///
/// Fields
/// -----------------
/// * `distance_in_range` – body distances (AU) mapped onto the scene range.
/// * `distance_out_range` – scene distance range of the bodies.
/// * `star_sphere_radius` – scene distance of every catalog star.
/// * `brightness_reference` – magnitude-to-brightness reference (`reference − mag`).
/// * `min_brightness` – floor of the star brightness.
/// * `time_speed_hours` – simulated hours per real second.
/// * `start_offset_days` – clock start, in days from now.
/// * `display_utc_offset_hours` – offset of the displayed date with respect to UTC.
///
/// Default values:
///
/// * `distance_in_range`: (0, 40) AU
/// * `distance_out_range`: (2, 50)
/// * `star_sphere_radius`: 1000
/// * `brightness_reference`: 7
/// * `min_brightness`: 1
/// * `time_speed_hours`: 5
/// * `start_offset_days`: 0
/// * `display_utc_offset_hours`: 0
#[derive(Debug, Clone, PartialEq)]
pub struct SkydomeParams {
    pub distance_in_range: (f64, f64),
    pub distance_out_range: (f64, f64),
    pub star_sphere_radius: f64,
    pub brightness_reference: f64,
    pub min_brightness: f64,
    pub time_speed_hours: f64,
    pub start_offset_days: f64,
    pub display_utc_offset_hours: f64,
}

impl SkydomeParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fluent builder starting from the defaults.
    pub fn builder() -> SkydomeParamsBuilder {
        SkydomeParamsBuilder::new()
    }
}

impl Default for SkydomeParams {
    fn default() -> Self {
        SkydomeParams {
            distance_in_range: (0.0, 40.0),
            distance_out_range: (2.0, 50.0),
            star_sphere_radius: 1000.0,
            brightness_reference: 7.0,
            min_brightness: 1.0,
            time_speed_hours: 5.0,
            start_offset_days: 0.0,
            display_utc_offset_hours: 0.0,
        }
    }
}

/// Builder for [`SkydomeParams`]; see [`SkydomeParamsBuilder::build`] for the validation rules.
#[derive(Debug, Clone)]
pub struct SkydomeParamsBuilder {
    params: SkydomeParams,
}

impl Default for SkydomeParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SkydomeParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: SkydomeParams::default(),
        }
    }

    // --- Scene placement ---
    pub fn distance_in_range(mut self, min: f64, max: f64) -> Self {
        self.params.distance_in_range = (min, max);
        self
    }
    pub fn distance_out_range(mut self, min: f64, max: f64) -> Self {
        self.params.distance_out_range = (min, max);
        self
    }
    pub fn star_sphere_radius(mut self, v: f64) -> Self {
        self.params.star_sphere_radius = v;
        self
    }

    // --- Star shading ---
    pub fn brightness_reference(mut self, v: f64) -> Self {
        self.params.brightness_reference = v;
        self
    }
    pub fn min_brightness(mut self, v: f64) -> Self {
        self.params.min_brightness = v;
        self
    }

    // --- Clock ---
    pub fn time_speed_hours(mut self, v: f64) -> Self {
        self.params.time_speed_hours = v;
        self
    }
    pub fn start_offset_days(mut self, v: f64) -> Self {
        self.params.start_offset_days = v;
        self
    }
    pub fn display_utc_offset_hours(mut self, v: f64) -> Self {
        self.params.display_utc_offset_hours = v;
        self
    }

    #[inline]
    fn gt0(x: f64) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    #[inline]
    fn ge0(x: f64) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Validate and return the parameters.
    ///
    /// Rules
    /// -----------------
    /// * both distance ranges have finite bounds (a degenerate input range is allowed),
    /// * `star_sphere_radius > 0`,
    /// * `brightness_reference` finite, `min_brightness ≥ 0`,
    /// * `time_speed_hours`, `start_offset_days` and `display_utc_offset_hours` finite.
    ///
    /// Return
    /// ------
    /// * the parameters, or [`SkydomeError::InvalidParameter`] naming the first offending field.
    pub fn build(self) -> Result<SkydomeParams, SkydomeError> {
        let p = &self.params;

        let (in_min, in_max) = p.distance_in_range;
        if !in_min.is_finite() || !in_max.is_finite() {
            return Err(SkydomeError::InvalidParameter(
                "distance_in_range bounds must be finite".into(),
            ));
        }
        let (out_min, out_max) = p.distance_out_range;
        if !out_min.is_finite() || !out_max.is_finite() {
            return Err(SkydomeError::InvalidParameter(
                "distance_out_range bounds must be finite".into(),
            ));
        }
        if !Self::gt0(p.star_sphere_radius) || !p.star_sphere_radius.is_finite() {
            return Err(SkydomeError::InvalidParameter(
                "star_sphere_radius must be > 0".into(),
            ));
        }
        if !p.brightness_reference.is_finite() {
            return Err(SkydomeError::InvalidParameter(
                "brightness_reference must be finite".into(),
            ));
        }
        if !Self::ge0(p.min_brightness) || !p.min_brightness.is_finite() {
            return Err(SkydomeError::InvalidParameter(
                "min_brightness must be >= 0".into(),
            ));
        }
        if !p.time_speed_hours.is_finite() {
            return Err(SkydomeError::InvalidParameter(
                "time_speed_hours must be finite".into(),
            ));
        }
        if !p.start_offset_days.is_finite() || !p.display_utc_offset_hours.is_finite() {
            return Err(SkydomeError::InvalidParameter(
                "clock offsets must be finite".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for SkydomeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Skydome parameters")?;
        writeln!(f, "------------------")?;
        writeln!(
            f,
            "  distance_in_range        = [{}, {}] AU",
            self.distance_in_range.0, self.distance_in_range.1
        )?;
        writeln!(
            f,
            "  distance_out_range       = [{}, {}]",
            self.distance_out_range.0, self.distance_out_range.1
        )?;
        writeln!(f, "  star_sphere_radius       = {}", self.star_sphere_radius)?;
        writeln!(f, "  brightness_reference     = {}", self.brightness_reference)?;
        writeln!(f, "  min_brightness           = {}", self.min_brightness)?;
        writeln!(f, "  time_speed_hours         = {} h/s", self.time_speed_hours)?;
        writeln!(f, "  start_offset_days        = {} d", self.start_offset_days)?;
        write!(f, "  display_utc_offset_hours = {} h", self.display_utc_offset_hours)
    }
}
