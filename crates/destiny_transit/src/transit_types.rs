//! Types for transit scans.

use chrono::{DateTime, Utc};
use destiny_core::Body;
use destiny_zodiac::{ZodiacIndex, ZodiacSign};
use serde::Serialize;

use crate::TransitError;

/// Which return, if any, fired on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitStatus {
    Neutral,
    /// The growth body occupies the natal sign.
    GrowthReturn,
    /// The pressure body occupies the natal sign (and the growth body does not).
    PressureReturn,
}

impl TransitStatus {
    /// Display label, e.g. `"Jupiter Return (Growth)"`.
    pub fn label(self, growth_body: Body, pressure_body: Body) -> String {
        match self {
            Self::Neutral => "Neutral".to_string(),
            Self::GrowthReturn => format!("{} Return (Growth)", growth_body.name()),
            Self::PressureReturn => format!("{} Return (Pressure)", pressure_body.name()),
        }
    }
}

/// Scan parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitConfig {
    /// Years to project forward from the scan start.
    pub horizon_years: f64,
    /// Body whose return scores positively (Jupiter by default).
    pub growth_body: Body,
    /// Body whose return scores negatively (Saturn by default).
    pub pressure_body: Body,
}

impl TransitConfig {
    /// Jupiter/Saturn scan over `horizon_years`.
    pub fn new(horizon_years: f64) -> Self {
        Self {
            horizon_years,
            growth_body: Body::Jupiter,
            pressure_body: Body::Saturn,
        }
    }

    pub fn with_bodies(mut self, growth_body: Body, pressure_body: Body) -> Self {
        self.growth_body = growth_body;
        self.pressure_body = pressure_body;
        self
    }

    pub fn validate(&self) -> Result<(), TransitError> {
        if !self.horizon_years.is_finite() || self.horizon_years <= 0.0 {
            return Err(TransitError::InvalidHorizon(self.horizon_years));
        }
        if self.growth_body == self.pressure_body {
            return Err(TransitError::InvalidConfig(
                "growth and pressure bodies must differ",
            ));
        }
        Ok(())
    }
}

/// One scan step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitRecord {
    /// Step instant.
    pub date: DateTime<Utc>,
    pub energy_score: i32,
    /// Sign of the growth body on this date.
    pub growth_sign: ZodiacSign,
    /// Sign of the pressure body on this date.
    pub pressure_sign: ZodiacSign,
    pub status: TransitStatus,
}

/// Chronologically ordered scan output.
///
/// Built once by the scanner and read-only afterwards. Records are in
/// strictly ascending date order with constant 30-day spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitSeries {
    natal_reference: ZodiacIndex,
    growth_body: Body,
    pressure_body: Body,
    records: Vec<TransitRecord>,
}

impl TransitSeries {
    pub(crate) fn new(
        natal_reference: ZodiacIndex,
        growth_body: Body,
        pressure_body: Body,
        records: Vec<TransitRecord>,
    ) -> Self {
        Self {
            natal_reference,
            growth_body,
            pressure_body,
            records,
        }
    }

    pub fn natal_reference(&self) -> ZodiacIndex {
        self.natal_reference
    }

    pub fn growth_body(&self) -> Body {
        self.growth_body
    }

    pub fn pressure_body(&self) -> Body {
        self.pressure_body
    }

    pub fn records(&self) -> &[TransitRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransitRecord> {
        self.records.iter()
    }

    /// Label of a record's status with this series' bodies.
    pub fn status_label(&self, record: &TransitRecord) -> String {
        record.status.label(self.growth_body, self.pressure_body)
    }
}

impl<'a> IntoIterator for &'a TransitSeries {
    type Item = &'a TransitRecord;
    type IntoIter = std::slice::Iter<'a, TransitRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(
            TransitStatus::GrowthReturn.label(Body::Jupiter, Body::Saturn),
            "Jupiter Return (Growth)"
        );
        assert_eq!(
            TransitStatus::PressureReturn.label(Body::Jupiter, Body::Saturn),
            "Saturn Return (Pressure)"
        );
        assert_eq!(TransitStatus::Neutral.label(Body::Mars, Body::Venus), "Neutral");
    }

    #[test]
    fn config_defaults() {
        let c = TransitConfig::new(15.0);
        assert_eq!(c.growth_body, Body::Jupiter);
        assert_eq!(c.pressure_body, Body::Saturn);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_horizon() {
        for years in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TransitConfig::new(years).validate(),
                Err(TransitError::InvalidHorizon(_))
            ));
        }
    }

    #[test]
    fn config_rejects_same_body() {
        let c = TransitConfig::new(1.0).with_bodies(Body::Saturn, Body::Saturn);
        assert!(matches!(c.validate(), Err(TransitError::InvalidConfig(_))));
    }
}
