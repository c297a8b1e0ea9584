//! Error types for date parsing and horizon arithmetic.

use thiserror::Error;

/// Errors from UTC parsing or forecast-window construction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input string is not a recognized UTC date or datetime.
    #[error("invalid UTC date '{input}': expected YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ")]
    InvalidDate { input: String },
    /// Horizon is not a positive finite number of years.
    #[error("horizon must be a positive finite number of years, got {years}")]
    InvalidHorizon { years: f64 },
    /// Window end does not fit in the calendar range.
    #[error("forecast window overflows the supported calendar range")]
    Overflow,
}
