//! # Planetarium façade
//!
//! [`Skydome`] binds an [`Observer`], the [`SkydomeParams`] of the scene and a true anomaly
//! strategy, and answers the per-frame questions of a renderer: where is a body, where is a
//! star, where should either be drawn and how bright.
//!
//! Every query is a pure function of its arguments and of this immutable configuration, so a
//! `Skydome` can be shared between threads and queried concurrently.
//!
//! ## Example
//!
//! ```rust,no_run
//! use skydome::{bodies::CelestialBody, observers::Observer, params::SkydomeParams, skydome::Skydome};
//! use skydome::time::epoch_from_iso;
//!
//! let beijing = Observer::new(39.9, 116.4).unwrap();
//! let sky = Skydome::new(beijing, SkydomeParams::default());
//!
//! let epoch = epoch_from_iso("2024-03-20T12:00:00 UTC").unwrap();
//! let sun = sky.horizontal(CelestialBody::Sun, &epoch).unwrap();
//! println!("Sun altitude: {:.2}°", sun.altitude);
//! ```
use hifitime::Epoch;
use log::debug;
use nalgebra::Vector3;

use crate::{
    bodies::CelestialBody,
    catalog::StarRecord,
    clock::SimulationClock,
    horizontal::{
        horizontal_for_moon, horizontal_for_planet_with, horizontal_for_star,
        HorizontalCoordinates,
    },
    kepler::{FirstOrderKepler, TrueAnomalySolver},
    observers::Observer,
    params::SkydomeParams,
    scene::{horizontal_to_scene, magnitude_to_brightness, map_range},
    skydome_errors::SkydomeError,
};

#[derive(Debug)]
pub struct Skydome {
    observer: Observer,
    params: SkydomeParams,
    solver: Box<dyn TrueAnomalySolver>,
}

impl Skydome {
    /// Planetarium using the single-step Kepler approximation.
    pub fn new(observer: Observer, params: SkydomeParams) -> Self {
        Skydome::with_solver(observer, params, Box::new(FirstOrderKepler))
    }

    /// Planetarium with an explicit true anomaly strategy, e.g. [`crate::kepler::NewtonKepler`].
    pub fn with_solver(
        observer: Observer,
        params: SkydomeParams,
        solver: Box<dyn TrueAnomalySolver>,
    ) -> Self {
        debug!(
            "Skydome for observer {:?} at ({}, {}) with {solver:?}",
            observer.name,
            observer.latitude(),
            observer.longitude()
        );
        Skydome {
            observer,
            params,
            solver,
        }
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn params(&self) -> &SkydomeParams {
        &self.params
    }

    /// Horizontal coordinates of any body, dispatching the Moon to its own model.
    pub fn horizontal(
        &self,
        body: CelestialBody,
        epoch: &Epoch,
    ) -> Result<HorizontalCoordinates, SkydomeError> {
        let horizontal = match body {
            CelestialBody::Moon => horizontal_for_moon(&self.observer, epoch),
            _ => horizontal_for_planet_with(body, &self.observer, epoch, self.solver.as_ref())?,
        };
        debug!("{body} at {epoch}: {horizontal:?}");
        Ok(horizontal)
    }

    pub fn horizontal_for_star(&self, star: &StarRecord, epoch: &Epoch) -> HorizontalCoordinates {
        horizontal_for_star(&self.observer, epoch, star.ra, star.dec)
    }

    /// Horizontal coordinates of every [`CelestialBody`], in [`CelestialBody::ALL`] order.
    pub fn all_bodies(
        &self,
        epoch: &Epoch,
    ) -> Result<Vec<(CelestialBody, HorizontalCoordinates)>, SkydomeError> {
        CelestialBody::ALL
            .iter()
            .map(|&body| Ok((body, self.horizontal(body, epoch)?)))
            .collect()
    }

    /// Scene distance of a body `distance` AU away.
    pub fn scene_distance(&self, distance: f64) -> f64 {
        let (in_min, in_max) = self.params.distance_in_range;
        let (out_min, out_max) = self.params.distance_out_range;
        map_range(distance, in_min, in_max, out_min, out_max)
    }

    /// Scene position of a body, its AU distance remapped onto `distance_out_range`.
    pub fn scene_position(
        &self,
        body: CelestialBody,
        epoch: &Epoch,
    ) -> Result<Vector3<f64>, SkydomeError> {
        let horizontal = self.horizontal(body, epoch)?;
        let distance = self.scene_distance(horizontal.distance.unwrap_or(0.0));
        Ok(horizontal_to_scene(&horizontal, distance))
    }

    /// Scene position of a star on the star sphere.
    pub fn star_scene_position(&self, star: &StarRecord, epoch: &Epoch) -> Vector3<f64> {
        horizontal_to_scene(
            &self.horizontal_for_star(star, epoch),
            self.params.star_sphere_radius,
        )
    }

    pub fn star_brightness(&self, star: &StarRecord) -> f64 {
        magnitude_to_brightness(
            star.magnitude,
            self.params.brightness_reference,
            self.params.min_brightness,
        )
    }

    /// Clock starting `start_offset_days` from now and running at `time_speed_hours`.
    pub fn start_clock(&self) -> Result<SimulationClock, SkydomeError> {
        SimulationClock::starting_now(
            self.params.start_offset_days,
            self.params.time_speed_hours,
        )
    }

    /// Date label of `clock`, in the display time zone of the parameters.
    pub fn date_label(&self, clock: &SimulationClock) -> String {
        clock.display_string(self.params.display_utc_offset_hours)
    }
}
