//! Transit-scoring engine.
//!
//! This crate provides:
//! - The forward scan that walks a forecast window in 30-day steps and
//!   scores growth/pressure returns and trines against a natal sign
//! - Natal chart computation (Sun and Moon signs) from an oracle
//! - Key-event and summary projections over a finished series

pub mod error;
pub mod events;
pub mod natal;
pub mod scan;
pub mod scoring;
pub mod transit_types;

pub use error::TransitError;
pub use events::{SeriesSummary, key_events};
pub use natal::{NatalChart, SignPlacement};
pub use scan::{scan, scan_from};
pub use scoring::{GROWTH_RETURN_SCORE, PRESSURE_RETURN_SCORE, TRINE_BONUS, is_trine, score_step};
pub use transit_types::{TransitConfig, TransitRecord, TransitSeries, TransitStatus};
