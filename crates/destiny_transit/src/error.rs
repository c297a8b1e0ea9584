//! Error types for transit scans and natal charts.

use chrono::NaiveDate;
use destiny_core::{Body, OracleError};
use destiny_time::TimeError;
use destiny_zodiac::ZodiacError;
use thiserror::Error;

/// Errors from a scan or natal-chart computation.
///
/// A scan never returns partial output: the first error aborts it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TransitError {
    /// Horizon is zero, negative or not finite.
    #[error("horizon must be a positive finite number of years, got {0}")]
    InvalidHorizon(f64),
    /// Other configuration problem.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The oracle failed for one body on one date.
    #[error("oracle failed for {body} on {date}: {source}")]
    Oracle {
        body: Body,
        date: NaiveDate,
        #[source]
        source: OracleError,
    },
    /// The oracle answered with a longitude that cannot be classified.
    #[error("unusable longitude for {body} on {date}: {source}")]
    Longitude {
        body: Body,
        date: NaiveDate,
        #[source]
        source: ZodiacError,
    },
    /// Natal reference or other zodiac input was invalid.
    #[error(transparent)]
    Zodiac(#[from] ZodiacError),
    /// Forecast window could not be built.
    #[error(transparent)]
    Time(#[from] TimeError),
}
