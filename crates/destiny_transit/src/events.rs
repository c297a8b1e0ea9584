//! Projections over a finished series: key events and summary statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::transit_types::{TransitRecord, TransitSeries, TransitStatus};

/// Non-zero steps, keeping only the first record of each status.
///
/// Output stays in chronological order. A trine-only step has status
/// `Neutral`, so the first such step is kept as the neutral entry.
pub fn key_events(series: &TransitSeries) -> Vec<TransitRecord> {
    let mut seen: Vec<TransitStatus> = Vec::with_capacity(3);
    series
        .iter()
        .filter(|r| r.energy_score != 0)
        .filter(|r| {
            if seen.contains(&r.status) {
                false
            } else {
                seen.push(r.status);
                true
            }
        })
        .copied()
        .collect()
}

/// Aggregate view of a series for charts and reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub steps: usize,
    pub growth_returns: usize,
    pub pressure_returns: usize,
    /// Neutral steps carrying a trine bonus.
    pub trine_only_steps: usize,
    pub peak_score: Option<i32>,
    /// First date the peak score occurs.
    pub peak_date: Option<DateTime<Utc>>,
    pub trough_score: Option<i32>,
    /// First date the trough score occurs.
    pub trough_date: Option<DateTime<Utc>>,
    pub mean_score: f64,
}

impl SeriesSummary {
    pub fn from_series(series: &TransitSeries) -> Self {
        let mut summary = Self {
            steps: series.len(),
            growth_returns: 0,
            pressure_returns: 0,
            trine_only_steps: 0,
            peak_score: None,
            peak_date: None,
            trough_score: None,
            trough_date: None,
            mean_score: 0.0,
        };
        let mut total: i64 = 0;

        for r in series {
            match r.status {
                TransitStatus::GrowthReturn => summary.growth_returns += 1,
                TransitStatus::PressureReturn => summary.pressure_returns += 1,
                TransitStatus::Neutral if r.energy_score != 0 => summary.trine_only_steps += 1,
                TransitStatus::Neutral => {}
            }
            if summary.peak_score.is_none_or(|p| r.energy_score > p) {
                summary.peak_score = Some(r.energy_score);
                summary.peak_date = Some(r.date);
            }
            if summary.trough_score.is_none_or(|t| r.energy_score < t) {
                summary.trough_score = Some(r.energy_score);
                summary.trough_date = Some(r.date);
            }
            total += i64::from(r.energy_score);
        }

        if summary.steps > 0 {
            summary.mean_score = total as f64 / summary.steps as f64;
        }
        summary
    }
}
