//! Forward transit scan.
//!
//! Walks from the scan start to `start + horizon_years * 365 days` in fixed
//! 30-day steps. At each step the oracle is asked for the growth and
//! pressure bodies' longitudes on that calendar date, both are mapped to
//! signs and the step is scored against the natal reference.
//!
//! The window always starts at "now" (from the supplied [`Clock`]), not at
//! the birth date. The first record is the start instant itself.

use chrono::{DateTime, NaiveDate, Utc};
use destiny_core::{Body, EphemerisOracle};
use destiny_time::{Clock, ForecastWindow, TimeError};
use destiny_zodiac::{ZodiacIndex, ZodiacSign, sign_of_longitude};
use log::{debug, trace, warn};

use crate::TransitError;
use crate::scoring::score_step;
use crate::transit_types::{TransitConfig, TransitRecord, TransitSeries};

/// Query one body and classify its sign.
pub(crate) fn body_sign<O>(
    oracle: &O,
    body: Body,
    date: NaiveDate,
) -> Result<(ZodiacSign, ZodiacIndex), TransitError>
where
    O: EphemerisOracle + ?Sized,
{
    let lon = oracle.longitude(body, date).map_err(|source| {
        warn!("oracle failed body={body} date={date}: {source}");
        TransitError::Oracle { body, date, source }
    })?;
    sign_of_longitude(lon).map_err(|source| TransitError::Longitude { body, date, source })
}

/// Scan starting at `clock.now()`.
pub fn scan<O, C>(
    config: &TransitConfig,
    natal_reference: ZodiacIndex,
    oracle: &O,
    clock: &C,
) -> Result<TransitSeries, TransitError>
where
    O: EphemerisOracle + ?Sized,
    C: Clock + ?Sized,
{
    scan_from(clock.now(), config, natal_reference, oracle)
}

/// Scan starting at an explicit instant.
pub fn scan_from<O>(
    start: DateTime<Utc>,
    config: &TransitConfig,
    natal_reference: ZodiacIndex,
    oracle: &O,
) -> Result<TransitSeries, TransitError>
where
    O: EphemerisOracle + ?Sized,
{
    config.validate()?;
    let window = ForecastWindow::from_horizon(start, config.horizon_years).map_err(|e| match e {
        TimeError::InvalidHorizon { .. } => TransitError::InvalidHorizon(config.horizon_years),
        other => other.into(),
    })?;
    if window.step_count() == 0 {
        return Err(TransitError::InvalidHorizon(config.horizon_years));
    }

    debug!(
        "transit scan start={} end={} steps={} natal={} growth={} pressure={}",
        window.start(),
        window.end(),
        window.step_count(),
        natal_reference.sign(),
        config.growth_body,
        config.pressure_body
    );

    let mut records = Vec::with_capacity(window.step_count());
    for current in window.steps() {
        let date = current.date_naive();
        let (growth_sign, growth_idx) = body_sign(oracle, config.growth_body, date)?;
        let (pressure_sign, pressure_idx) = body_sign(oracle, config.pressure_body, date)?;
        let (energy_score, status) = score_step(growth_idx, pressure_idx, natal_reference);

        trace!("step date={date} growth={growth_sign} pressure={pressure_sign} score={energy_score}");

        records.push(TransitRecord {
            date: current,
            energy_score,
            growth_sign,
            pressure_sign,
            status,
        });
    }

    debug!("transit scan done records={}", records.len());

    Ok(TransitSeries::new(
        natal_reference,
        config.growth_body,
        config.pressure_body,
        records,
    ))
}
