//! Time handling for transit scans.
//!
//! This crate provides:
//! - A [`Clock`] seam so scans can be pinned to a fixed "now"
//! - UTC date/datetime parsing for user input
//! - The forecast window and its fixed 30-day stepping

pub mod clock;
pub mod error;
pub mod utc_date;
pub mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::TimeError;
pub use utc_date::{parse_date, parse_utc};
pub use window::{DAYS_PER_YEAR, ForecastWindow, STEP_DAYS, Steps, horizon_span, step_delta};
