pub mod bodies;
pub mod catalog;
pub mod clock;
pub mod constants;
pub mod heliocentric;
pub mod horizontal;
pub mod kepler;
pub mod moon;
pub mod observers;
pub mod orbital_elements;
pub mod params;
pub mod ref_system;
pub mod scene;
pub mod skydome;
pub mod skydome_errors;
pub mod time;
