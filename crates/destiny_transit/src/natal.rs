//! Natal chart: Sun and Moon signs at the birth moment.
//!
//! The Moon's sign index is the natal reference every transit step is
//! scored against.

use destiny_core::{Body, EphemerisOracle, Observation};
use destiny_zodiac::{SignPosition, ZodiacIndex, normalize_360, sign_position};
use log::debug;

use crate::TransitError;

/// One body's placement on the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPlacement {
    pub body: Body,
    /// Longitude wrapped to [0, 360) degrees.
    pub longitude_deg: f64,
    pub position: SignPosition,
}

impl SignPlacement {
    fn observe<O>(oracle: &O, body: Body, observation: &Observation) -> Result<Self, TransitError>
    where
        O: EphemerisOracle + ?Sized,
    {
        let date = observation.instant.date_naive();
        let lon = oracle
            .longitude_at(body, observation)
            .map_err(|source| TransitError::Oracle { body, date, source })?;
        let deg = lon.to_degrees();
        let position =
            sign_position(deg).map_err(|source| TransitError::Longitude { body, date, source })?;
        Ok(Self {
            body,
            longitude_deg: normalize_360(deg),
            position,
        })
    }
}

/// Sun and Moon placements for a subject.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NatalChart {
    pub observation: Observation,
    pub sun: SignPlacement,
    pub moon: SignPlacement,
}

impl NatalChart {
    /// Query the oracle at the birth observation.
    pub fn compute<O>(oracle: &O, observation: &Observation) -> Result<Self, TransitError>
    where
        O: EphemerisOracle + ?Sized,
    {
        let sun = SignPlacement::observe(oracle, Body::Sun, observation)?;
        let moon = SignPlacement::observe(oracle, Body::Moon, observation)?;
        debug!(
            "natal chart at {}: sun={} moon={}",
            observation.instant, sun.position.sign, moon.position.sign
        );
        Ok(Self {
            observation: *observation,
            sun,
            moon,
        })
    }

    /// The natal Moon's sign index.
    pub fn natal_reference(&self) -> ZodiacIndex {
        self.moon.position.index
    }
}
