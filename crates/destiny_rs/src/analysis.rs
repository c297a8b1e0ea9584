//! One forecast analysis, start to finish.
//!
//! An [`Analysis`] is the session value handed to presentation layers
//! (charts, tables, report writers). It is built fresh per request and
//! never mutated afterwards.

use destiny_config::{DestinyConfig, ForecastConfig};
use destiny_core::{EphemerisOracle, Observation};
use destiny_ephem::TabulatedEphemeris;
use destiny_time::Clock;
use destiny_transit::{
    NatalChart, SeriesSummary, TransitConfig, TransitRecord, TransitSeries, key_events, scan,
};
use destiny_zodiac::ZodiacIndex;
use log::info;

use crate::DestinyError;

/// Where the natal reference comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NatalSource {
    /// Compute Sun and Moon from the oracle at the birth observation.
    Birth(Observation),
    /// Use a precomputed Moon sign index.
    Index(ZodiacIndex),
}

/// Inputs for [`analyze`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisRequest {
    pub natal: NatalSource,
    pub transit: TransitConfig,
}

/// Everything derived from one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Present when the request carried birth data.
    pub chart: Option<NatalChart>,
    pub natal_reference: ZodiacIndex,
    pub series: TransitSeries,
    pub key_events: Vec<TransitRecord>,
    pub summary: SeriesSummary,
}

/// Run natal derivation, scan and projections.
pub fn analyze<O, C>(
    request: &AnalysisRequest,
    oracle: &O,
    clock: &C,
) -> Result<Analysis, DestinyError>
where
    O: EphemerisOracle + ?Sized,
    C: Clock + ?Sized,
{
    let (chart, natal_reference) = match request.natal {
        NatalSource::Birth(observation) => {
            let chart = NatalChart::compute(oracle, &observation)?;
            let natal = chart.natal_reference();
            (Some(chart), natal)
        }
        NatalSource::Index(idx) => (None, idx),
    };

    let series = scan(&request.transit, natal_reference, oracle, clock)?;
    let key_events = key_events(&series);
    let summary = SeriesSummary::from_series(&series);

    info!(
        "analysis complete natal={} steps={} key_events={}",
        natal_reference.sign(),
        series.len(),
        key_events.len()
    );

    Ok(Analysis {
        chart,
        natal_reference,
        series,
        key_events,
        summary,
    })
}

impl AnalysisRequest {
    /// Request for a subject's birth observation.
    pub fn for_birth(observation: Observation, transit: TransitConfig) -> Self {
        Self {
            natal: NatalSource::Birth(observation),
            transit,
        }
    }

    /// Request against a known natal Moon index.
    pub fn for_index(natal: ZodiacIndex, transit: TransitConfig) -> Self {
        Self {
            natal: NatalSource::Index(natal),
            transit,
        }
    }

    /// Build from a config file's `[subject]` and `[forecast]` sections.
    pub fn from_config(config: &DestinyConfig) -> Result<Self, DestinyError> {
        let subject = config
            .subject
            .as_ref()
            .ok_or_else(|| DestinyError::Usage("config has no [subject] section".to_string()))?;
        Ok(Self::for_birth(
            subject.observation()?,
            transit_config(&config.forecast),
        ))
    }
}

/// Scan settings from a `[forecast]` section.
pub fn transit_config(forecast: &ForecastConfig) -> TransitConfig {
    TransitConfig::new(forecast.horizon_years)
        .with_bodies(forecast.growth_body, forecast.pressure_body)
}

/// Load the table named by `[ephemeris]`.
pub fn load_oracle(config: &DestinyConfig) -> Result<TabulatedEphemeris, DestinyError> {
    let eph = config
        .ephemeris
        .as_ref()
        .ok_or_else(|| DestinyError::Usage("config has no [ephemeris] section".to_string()))?;
    Ok(TabulatedEphemeris::load(&eph.table)?)
}
