//! Observer location and the natal observation moment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::LocationError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a validated location.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, LocationError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), LocationError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(LocationError::Latitude(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(LocationError::Longitude(self.longitude_deg));
        }
        Ok(())
    }
}

/// A moment and (optionally) a place at which a body is observed.
///
/// Natal queries carry the birth instant and birthplace; transit queries
/// only need a calendar date and go through
/// [`EphemerisOracle::longitude`](crate::EphemerisOracle::longitude).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub instant: DateTime<Utc>,
    pub location: Option<GeoLocation>,
}

impl Observation {
    pub fn new(instant: DateTime<Utc>, location: Option<GeoLocation>) -> Self {
        Self { instant, location }
    }
}
