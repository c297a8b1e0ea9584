//! TOML configuration for forecast runs.
//!
//! ```toml
//! [subject]
//! name = "Sample"
//! birth = "1980-01-01T12:00:00Z"
//! latitude_deg = 29.76
//! longitude_deg = -95.37
//!
//! [forecast]
//! horizon_years = 15.0
//! growth_body = "jupiter"
//! pressure_body = "saturn"
//!
//! [ephemeris]
//! table = "ephemeris.json"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Relative paths (ephemeris table, log directory) resolve against the
//! directory holding the config file.

pub mod error;

use std::path::{Path, PathBuf};

use destiny_core::{Body, GeoLocation, Observation};
use destiny_time::parse_utc;
use serde::Deserialize;

pub use error::ConfigError;

/// Largest accepted forecast horizon in years.
pub const MAX_HORIZON_YEARS: f64 = 100.0;

/// Whole configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DestinyConfig {
    pub subject: Option<SubjectConfig>,
    #[serde(default)]
    pub forecast: ForecastConfig,
    pub ephemeris: Option<EphemerisConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Birth data of the person being forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Birth instant, `YYYY-MM-DDThh:mm:ssZ` or `YYYY-MM-DD`.
    pub birth: String,
    pub latitude_deg: Option<f64>,
    pub longitude_deg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ForecastConfig {
    pub horizon_years: f64,
    pub growth_body: Body,
    pub pressure_body: Body,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_years: 15.0,
            growth_body: Body::Jupiter,
            pressure_body: Body::Saturn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EphemerisConfig {
    /// Path to a JSON longitude table.
    pub table: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// flexi_logger spec string, e.g. `"info"` or `"warn,destiny_transit=debug"`.
    pub level: String,
    /// Optional directory for rotating log files.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            directory: None,
        }
    }
}

impl SubjectConfig {
    /// Birth instant and (if given) birthplace.
    pub fn observation(&self) -> Result<Observation, ConfigError> {
        let instant =
            parse_utc(&self.birth).map_err(|e| ConfigError::Invalid(format!("subject.birth: {e}")))?;
        let location = match (self.latitude_deg, self.longitude_deg) {
            (Some(lat), Some(lon)) => Some(
                GeoLocation::new(lat, lon)
                    .map_err(|e| ConfigError::Invalid(format!("subject location: {e}")))?,
            ),
            (None, None) => None,
            _ => {
                return Err(ConfigError::Invalid(
                    "subject latitude_deg and longitude_deg must be given together".to_string(),
                ));
            }
        };
        Ok(Observation::new(instant, location))
    }
}

impl DestinyConfig {
    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.forecast;
        if !f.horizon_years.is_finite() || f.horizon_years <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "forecast.horizon_years must be positive, got {}",
                f.horizon_years
            )));
        }
        if f.horizon_years > MAX_HORIZON_YEARS {
            return Err(ConfigError::Invalid(format!(
                "forecast.horizon_years must be at most {MAX_HORIZON_YEARS}, got {}",
                f.horizon_years
            )));
        }
        if f.growth_body == f.pressure_body {
            return Err(ConfigError::Invalid(
                "forecast.growth_body and forecast.pressure_body must differ".to_string(),
            ));
        }
        if let Some(eph) = &self.ephemeris {
            if eph.table.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "ephemeris.table must not be empty".to_string(),
                ));
            }
        }
        if let Some(subject) = &self.subject {
            subject.observation()?;
        }
        Ok(())
    }

    fn resolve_paths(&mut self, base: &Path) {
        if let Some(eph) = &mut self.ephemeris {
            if eph.table.is_relative() {
                eph.table = base.join(&eph.table);
            }
        }
        if let Some(dir) = &mut self.logging.directory {
            if dir.is_relative() {
                *dir = base.join(&*dir);
            }
        }
    }
}
