//! # Simulation clock
//!
//! The engine itself is stateless; a renderer that animates the sky owns one
//! [`SimulationClock`], advances it once per frame with the real elapsed time and re-queries
//! the engine at [`SimulationClock::current`].
//!
//! Stars have fixed equatorial coordinates, so between two frames only the Earth's rotation
//! moves them: instead of re-projecting the whole catalog, a renderer may spin the star field
//! around the celestial pole by [`star_field_rotation_deg`] of the elapsed simulated hours.
use hifitime::{Epoch, Unit};
use log::trace;

use crate::{
    constants::{Degree, DEG_PER_HOUR},
    skydome_errors::SkydomeError,
};

/// Simulated time advancing `speed_hours` simulated hours per real second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationClock {
    current: Epoch,
    pub speed_hours: f64,
}

impl SimulationClock {
    pub fn new(start: Epoch, speed_hours: f64) -> Self {
        SimulationClock {
            current: start,
            speed_hours,
        }
    }

    /// Clock started `offset_days` days away from the current system time.
    ///
    /// Return
    /// ------
    /// * the clock, or [`SkydomeError::ClockUnavailable`] if the system time cannot be read.
    pub fn starting_now(offset_days: f64, speed_hours: f64) -> Result<Self, SkydomeError> {
        let now = Epoch::now().map_err(|e| SkydomeError::ClockUnavailable(e.to_string()))?;
        Ok(SimulationClock::new(now + offset_days * Unit::Day, speed_hours))
    }

    pub fn current(&self) -> Epoch {
        self.current
    }

    /// Move the clock by `speed_hours × real_dt_seconds` hours.
    ///
    /// Return
    /// ------
    /// * the simulated hours actually elapsed (negative when running backwards).
    pub fn advance(&mut self, real_dt_seconds: f64) -> f64 {
        let previous = self.current;
        self.current += self.speed_hours * real_dt_seconds * Unit::Hour;
        let elapsed = (self.current - previous).to_unit(Unit::Hour);
        trace!("Clock advanced to {} (+{elapsed} h)", self.current);
        elapsed
    }

    /// UI label of the current date, shifted by `utc_offset_hours`: `YYYY-MM-DD HH:MM:SS`.
    pub fn display_string(&self, utc_offset_hours: f64) -> String {
        let shifted = self.current + utc_offset_hours * Unit::Hour;
        let (y, m, d, h, min, s, _) = shifted.to_gregorian_utc();
        format!("{y:04}-{m:02}-{d:02} {h:02}:{min:02}:{s:02}")
    }
}

/// Rotation of the sky about the celestial pole after `elapsed_hours`: 15° per hour.
pub fn star_field_rotation_deg(elapsed_hours: f64) -> Degree {
    DEG_PER_HOUR * elapsed_hours
}
