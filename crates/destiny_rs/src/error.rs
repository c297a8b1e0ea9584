//! Top-level error type for the facade.

use destiny_config::ConfigError;
use destiny_ephem::EphemError;
use destiny_time::TimeError;
use destiny_transit::TransitError;
use destiny_zodiac::ZodiacError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DestinyError {
    #[error(transparent)]
    Transit(#[from] TransitError),
    #[error(transparent)]
    Zodiac(#[from] ZodiacError),
    #[error(transparent)]
    Ephemeris(#[from] EphemError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("logging: {0}")]
    Logging(String),
    #[error("export failed: {0}")]
    Export(#[from] std::io::Error),
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}
