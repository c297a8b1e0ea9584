//! JSON longitude tables and interpolation.
//!
//! File layout:
//!
//! ```json
//! {
//!   "unit": "degrees",
//!   "bodies": {
//!     "jupiter": [ { "date": "2026-01-01", "longitude": 105.2 }, ... ],
//!     "saturn":  [ ... ]
//!   }
//! }
//! ```
//!
//! Between two samples the longitude is interpolated linearly along the
//! shorter arc, so a body crossing 360 -> 0 interpolates through Pisces
//! into Aries instead of sweeping backwards across the wheel.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate, Timelike};
use destiny_core::{AngleUnit, Body, EphemerisOracle, Longitude, Observation, OracleError};
use log::debug;
use serde::Deserialize;

use crate::EphemError;

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    unit: AngleUnit,
    bodies: BTreeMap<String, Vec<Sample>>,
}

/// One tabulated position.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub date: NaiveDate,
    pub longitude: f64,
}

/// Samples for one body, as (day number, degrees in [0, 360)).
#[derive(Debug, Clone)]
struct Track {
    days: Vec<f64>,
    degrees: Vec<f64>,
    first: NaiveDate,
    last: NaiveDate,
}

/// Normalize an angle to [-180, +180].
fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

fn day_number(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

impl Track {
    fn build(name: &str, unit: AngleUnit, samples: &[Sample]) -> Result<Self, EphemError> {
        let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
            return Err(EphemError::EmptyBody(name.to_string()));
        };
        let mut days = Vec::with_capacity(samples.len());
        let mut degrees = Vec::with_capacity(samples.len());
        for (i, s) in samples.iter().enumerate() {
            if !s.longitude.is_finite() {
                return Err(EphemError::NonFinite {
                    body: name.to_string(),
                    date: s.date,
                });
            }
            if i > 0 && s.date <= samples[i - 1].date {
                return Err(EphemError::NotAscending {
                    body: name.to_string(),
                    date: s.date,
                });
            }
            days.push(day_number(s.date));
            degrees.push(Longitude::new(s.longitude, unit).to_degrees().rem_euclid(360.0));
        }
        Ok(Self {
            days,
            degrees,
            first: first.date,
            last: last.date,
        })
    }

    fn covers(&self, day: f64) -> bool {
        day >= self.days[0] && day <= self.days[self.days.len() - 1]
    }

    /// Caller guarantees `covers(day)`.
    fn interpolate(&self, day: f64) -> f64 {
        let hi = self.days.partition_point(|&d| d < day);
        if hi < self.days.len() && self.days[hi] == day {
            return self.degrees[hi];
        }
        let lo = hi - 1;
        let t = (day - self.days[lo]) / (self.days[hi] - self.days[lo]);
        let delta = normalize_to_pm180(self.degrees[hi] - self.degrees[lo]);
        (self.degrees[lo] + delta * t).rem_euclid(360.0)
    }
}

/// Oracle answering from per-body longitude tables.
#[derive(Debug, Clone)]
pub struct TabulatedEphemeris {
    tracks: BTreeMap<Body, Track>,
}

impl TabulatedEphemeris {
    /// Load a JSON table from disk.
    pub fn load(path: &Path) -> Result<Self, EphemError> {
        let content = std::fs::read_to_string(path).map_err(|source| EphemError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json_str(&content)?;
        debug!(
            "loaded ephemeris table {} bodies={}",
            path.display(),
            table.tracks.len()
        );
        Ok(table)
    }

    /// Parse a JSON table.
    pub fn from_json_str(content: &str) -> Result<Self, EphemError> {
        let file: TableFile = serde_json::from_str(content)?;
        let mut tracks = BTreeMap::new();
        let mut keys: BTreeMap<Body, &str> = BTreeMap::new();
        for (name, samples) in &file.bodies {
            let body =
                Body::from_name(name).ok_or_else(|| EphemError::UnknownBody(name.clone()))?;
            if let Some(first) = keys.insert(body, name) {
                return Err(EphemError::DuplicateBody {
                    body: body.name().to_string(),
                    first: first.to_string(),
                    second: name.clone(),
                });
            }
            tracks.insert(body, Track::build(name, file.unit, samples)?);
        }
        Ok(Self { tracks })
    }

    /// Build from in-memory samples.
    pub fn from_samples(
        unit: AngleUnit,
        samples: impl IntoIterator<Item = (Body, Vec<Sample>)>,
    ) -> Result<Self, EphemError> {
        let mut tracks = BTreeMap::new();
        for (body, s) in samples {
            tracks.insert(body, Track::build(body.name(), unit, &s)?);
        }
        Ok(Self { tracks })
    }

    /// Bodies present in the table.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.tracks.keys().copied()
    }

    /// First and last tabulated dates for a body.
    pub fn coverage(&self, body: Body) -> Option<(NaiveDate, NaiveDate)> {
        self.tracks.get(&body).map(|t| (t.first, t.last))
    }

    fn evaluate(&self, body: Body, day: f64, date: NaiveDate) -> Result<Longitude, OracleError> {
        let track = self
            .tracks
            .get(&body)
            .ok_or_else(|| OracleError::Unavailable(format!("no table for {body}")))?;
        if !track.covers(day) {
            return Err(OracleError::OutOfRange { date });
        }
        Ok(Longitude::degrees(track.interpolate(day)))
    }
}

impl EphemerisOracle for TabulatedEphemeris {
    fn longitude(&self, body: Body, date: NaiveDate) -> Result<Longitude, OracleError> {
        self.evaluate(body, day_number(date), date)
    }

    fn longitude_at(&self, body: Body, observation: &Observation) -> Result<Longitude, OracleError> {
        let instant = observation.instant;
        let date = instant.date_naive();
        let frac = f64::from(instant.num_seconds_from_midnight()) / 86_400.0;
        self.evaluate(body, day_number(date) + frac, date)
    }
}
