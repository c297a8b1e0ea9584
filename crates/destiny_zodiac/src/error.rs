//! Error types for zodiac classification.

use thiserror::Error;

/// Input-validation failures of the zodiac mapper.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ZodiacError {
    /// NaN or infinite longitude; it has no sign.
    #[error("longitude must be finite, got {0}")]
    NonFiniteLongitude(f64),
    /// Sign index outside 0..=11.
    #[error("zodiac index {0} outside 0..=11")]
    IndexOutOfRange(i64),
}
