//! # Constants and type definitions for Skydome
//!
//! This module centralizes the **astronomical constants**, **conversion factors**, and
//! **type aliases** shared by the time base, the orbital element table, the orbit solver
//! and the horizontal projector.
//!
//! ## Overview
//!
//! - Reference epoch (J2000.0) and calendar constants
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ degrees, AU ↔ km)
//! - Obliquity of the ecliptic used by the ecliptic → equatorial rotation
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds per degree
pub const ARCSEC_PER_DEG: f64 = 3600.0;

/// Days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36525.0;

/// Hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Degrees of Earth rotation per hour of time (360° / 24h)
pub const DEG_PER_HOUR: f64 = 15.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 UTC)
pub const T2000: MJD = 51544.5;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Mean obliquity of the ecliptic at J2000, in degrees.
///
/// Held constant: no secular drift term is modeled.
pub const OBLIQUITY_J2000: Degree = 23.439281;

/// Obliquity used by the closed-form lunar model, in degrees.
pub const LUNAR_OBLIQUITY: Degree = 23.4397;

/// Below this value of `|cos(alt)·cos(lat)|` the azimuth is reported as undefined.
pub const AZIMUTH_GUARD_EPS: f64 = 1e-6;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Fractional days since J2000.0
pub type Days = f64;
/// Julian centuries since J2000.0
pub type Centuries = f64;
/// Modified Julian Date (days)
pub type MJD = f64;
