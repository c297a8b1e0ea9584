//! The ephemeris oracle contract.
//!
//! Positions are a black box to this workspace: an oracle is anything that
//! can answer "where is this body on the ecliptic on this date". The oracle
//! may report degrees or radians; callers normalize through
//! [`Longitude::to_degrees`].

use chrono::NaiveDate;

use crate::{Body, Longitude, Observation, OracleError};

/// Source of ecliptic longitudes.
///
/// Implementations are called synchronously, one body per call. A scan
/// issues two calls per step and aborts on the first error.
pub trait EphemerisOracle {
    /// Longitude of `body` on calendar date `date`.
    fn longitude(&self, body: Body, date: NaiveDate) -> Result<Longitude, OracleError>;

    /// Longitude of `body` at a precise observation (used for the natal chart).
    ///
    /// Date-granular oracles can rely on the default, which drops the time
    /// of day and the location.
    fn longitude_at(&self, body: Body, observation: &Observation) -> Result<Longitude, OracleError> {
        self.longitude(body, observation.instant.date_naive())
    }
}

impl<T: EphemerisOracle + ?Sized> EphemerisOracle for &T {
    fn longitude(&self, body: Body, date: NaiveDate) -> Result<Longitude, OracleError> {
        (**self).longitude(body, date)
    }

    fn longitude_at(&self, body: Body, observation: &Observation) -> Result<Longitude, OracleError> {
        (**self).longitude_at(body, observation)
    }
}

impl<T: EphemerisOracle + ?Sized> EphemerisOracle for Box<T> {
    fn longitude(&self, body: Body, date: NaiveDate) -> Result<Longitude, OracleError> {
        (**self).longitude(body, date)
    }

    fn longitude_at(&self, body: Body, observation: &Observation) -> Result<Longitude, OracleError> {
        (**self).longitude_at(body, observation)
    }
}

/// Adapts a closure into an oracle.
///
/// ```rust
/// use chrono::NaiveDate;
/// use destiny_core::{Body, EphemerisOracle, FnOracle, Longitude, OracleError};
///
/// let oracle = FnOracle(|body: Body, _date: NaiveDate| -> Result<Longitude, OracleError> {
///     match body {
///         Body::Jupiter => Ok(Longitude::degrees(100.0)),
///         _ => Ok(Longitude::degrees(0.0)),
///     }
/// });
/// let date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
/// assert_eq!(oracle.longitude(Body::Jupiter, date).unwrap().to_degrees(), 100.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnOracle<F>(pub F);

impl<F> EphemerisOracle for FnOracle<F>
where
    F: Fn(Body, NaiveDate) -> Result<Longitude, OracleError>,
{
    fn longitude(&self, body: Body, date: NaiveDate) -> Result<Longitude, OracleError> {
        (self.0)(body, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    struct Constant;

    impl EphemerisOracle for Constant {
        fn longitude(&self, body: Body, date: NaiveDate) -> Result<Longitude, OracleError> {
            if date.format("%Y").to_string() == "1900" {
                return Err(OracleError::OutOfRange { date });
            }
            Ok(Longitude::degrees(match body {
                Body::Moon => 95.0,
                _ => 10.0,
            }))
        }
    }

    #[test]
    fn default_longitude_at_uses_date() {
        let obs = Observation::new(Utc.with_ymd_and_hms(1980, 1, 1, 23, 59, 0).unwrap(), None);
        let lon = Constant.longitude_at(Body::Moon, &obs).unwrap();
        assert_eq!(lon.to_degrees(), 95.0);
    }

    #[test]
    fn errors_pass_through_references() {
        let oracle: &dyn EphemerisOracle = &Constant;
        let date = NaiveDate::from_ymd_opt(1900, 6, 1).unwrap();
        assert_eq!(
            (&oracle).longitude(Body::Sun, date),
            Err(OracleError::OutOfRange { date })
        );
    }

    #[test]
    fn boxed_oracle() {
        let oracle: Box<dyn EphemerisOracle> = Box::new(Constant);
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(oracle.longitude(Body::Sun, date).unwrap().to_degrees(), 10.0);
    }
}
