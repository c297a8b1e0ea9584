//! Forecast window and fixed-period stepping.
//!
//! A forecast year is exactly 365 days and a step is exactly 30 days.
//! These are not calendar months: the walk advances by a constant
//! `TimeDelta` and stops at the first instant `>= end`.

use chrono::{DateTime, TimeDelta, Utc};

use crate::TimeError;

/// Days counted per forecast year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Days between consecutive scan steps.
pub const STEP_DAYS: i64 = 30;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Half-open interval `[start, end)` walked in 30-day steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ForecastWindow {
    /// Window from `start` spanning `horizon_years * 365` days.
    pub fn from_horizon(start: DateTime<Utc>, horizon_years: f64) -> Result<Self, TimeError> {
        let span = horizon_span(horizon_years)?;
        let end = start
            .checked_add_signed(span)
            .ok_or(TimeError::Overflow)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Step instants, starting at `start` itself.
    pub fn steps(&self) -> Steps {
        Steps {
            current: Some(self.start),
            end: self.end,
            step: step_delta(),
        }
    }

    /// Number of instants [`steps`](Self::steps) yields.
    pub fn step_count(&self) -> usize {
        let span_ms = (self.end - self.start).num_milliseconds();
        if span_ms <= 0 {
            return 0;
        }
        let step_ms = step_delta().num_milliseconds();
        ((span_ms + step_ms - 1) / step_ms) as usize
    }
}

/// One scan period.
pub fn step_delta() -> TimeDelta {
    TimeDelta::days(STEP_DAYS)
}

/// `horizon_years * 365` days at millisecond resolution.
pub fn horizon_span(horizon_years: f64) -> Result<TimeDelta, TimeError> {
    if !horizon_years.is_finite() || horizon_years <= 0.0 {
        return Err(TimeError::InvalidHorizon {
            years: horizon_years,
        });
    }
    let millis = (horizon_years * DAYS_PER_YEAR * MILLIS_PER_DAY).round();
    // Sub-millisecond horizons would give an empty window.
    if millis < 1.0 {
        return Err(TimeError::InvalidHorizon {
            years: horizon_years,
        });
    }
    if millis >= i64::MAX as f64 {
        return Err(TimeError::Overflow);
    }
    TimeDelta::try_milliseconds(millis as i64).ok_or(TimeError::Overflow)
}

/// Iterator over step instants of a [`ForecastWindow`].
#[derive(Debug, Clone)]
pub struct Steps {
    current: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
    step: TimeDelta,
}

impl Iterator for Steps {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        if current >= self.end {
            self.current = None;
            return None;
        }
        self.current = current.checked_add_signed(self.step);
        Some(current)
    }
}
