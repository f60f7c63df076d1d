//! # Solar system bodies
//!
//! Closed enumeration of the bodies whose sky position can be queried. Earth is deliberately
//! absent: its elements are only used as the subtraction term of the heliocentric → geocentric
//! step (see [`crate::orbital_elements::earth_elements`]).
use std::fmt;
use std::str::FromStr;

use crate::skydome_errors::SkydomeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBody {
    /// Every body, in scene instantiation order.
    pub const ALL: [CelestialBody; 10] = [
        CelestialBody::Moon,
        CelestialBody::Sun,
        CelestialBody::Mars,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
        }
    }

    /// `true` for bodies positioned through the orbital element table and Kepler solver.
    pub fn has_orbital_elements(&self) -> bool {
        !matches!(self, CelestialBody::Moon)
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CelestialBody {
    type Err = SkydomeError;

    /// Case-insensitive lookup by English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CelestialBody::ALL
            .iter()
            .copied()
            .find(|body| body.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SkydomeError::UnsupportedBody(wanted.to_string()))
    }
}

#[cfg(test)]
mod bodies_test {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("Mars".parse::<CelestialBody>(), Ok(CelestialBody::Mars));
        assert_eq!(" pluto ".parse::<CelestialBody>(), Ok(CelestialBody::Pluto));
        assert_eq!("SUN".parse::<CelestialBody>(), Ok(CelestialBody::Sun));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "Earth".parse::<CelestialBody>(),
            Err(SkydomeError::UnsupportedBody("Earth".into()))
        );
        assert_eq!(
            "Vulcan".parse::<CelestialBody>(),
            Err(SkydomeError::UnsupportedBody("Vulcan".into()))
        );
    }

    #[test]
    fn test_all_bodies_distinct() {
        let mut all = CelestialBody::ALL.to_vec();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 10);
        for body in CelestialBody::ALL {
            assert_eq!(body.to_string().parse::<CelestialBody>(), Ok(body));
        }
    }
}
