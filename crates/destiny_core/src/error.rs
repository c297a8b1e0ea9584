//! Oracle error types.

use thiserror::Error;

/// Failures an ephemeris oracle may report for a single query.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The oracle cannot answer for this body at all.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
    /// The oracle failed while computing a position.
    #[error("computation error: {0}")]
    Computation(String),
    /// The requested date lies outside the oracle's coverage.
    #[error("date {date} outside ephemeris coverage")]
    OutOfRange { date: chrono::NaiveDate },
}

/// Invalid observation parameters.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum LocationError {
    #[error("latitude {0} outside [-90, 90]")]
    Latitude(f64),
    #[error("longitude {0} outside [-180, 180]")]
    Longitude(f64),
}
