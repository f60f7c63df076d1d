use crate::{constants::Degree, skydome_errors::SkydomeError};

/// Geographic position of the person looking at the sky.
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    // geodetic latitude in degrees, north positive
    latitude: Degree,
    // in degrees east of Greenwich
    longitude: Degree,
    pub name: Option<String>,
}

impl Observer {
    /// Build an observer, rejecting latitudes outside [-90, 90], longitudes outside
    /// [-180, 180] and non-finite values.
    pub fn new(latitude: Degree, longitude: Degree) -> Result<Observer, SkydomeError> {
        if !latitude.is_finite() || latitude.abs() > 90.0 {
            return Err(SkydomeError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || longitude.abs() > 180.0 {
            return Err(SkydomeError::InvalidLongitude(longitude));
        }
        Ok(Observer {
            latitude,
            longitude,
            name: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Observer {
        self.name = Some(name.into());
        self
    }

    pub fn latitude(&self) -> Degree {
        self.latitude
    }

    pub fn longitude(&self) -> Degree {
        self.longitude
    }
}
