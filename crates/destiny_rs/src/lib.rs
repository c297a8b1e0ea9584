//! Convenience facade for destiny forecasts.
//!
//! Wires the workspace crates into one call: derive the natal reference,
//! run the transit scan and project key events and a summary.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use destiny_rs::*;
//!
//! let config = DestinyConfig::load(Path::new("destiny.toml"))?;
//! let oracle = load_oracle(&config)?;
//! let request = AnalysisRequest::from_config(&config)?;
//! let analysis = analyze(&request, &oracle, &SystemClock)?;
//! for event in &analysis.key_events {
//!     println!("{} {}", event.date.date_naive(), analysis.series.status_label(event));
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod export;
pub mod logging;

pub use analysis::{
    Analysis, AnalysisRequest, NatalSource, analyze, load_oracle, transit_config,
};
pub use error::DestinyError;
pub use export::{TimelineRow, timeline_rows, write_csv, write_json, write_table};
pub use logging::{init_logging, logging_status};

// Re-export the vocabulary so callers need only this crate.
pub use destiny_config::DestinyConfig;
pub use destiny_core::{AngleUnit, Body, EphemerisOracle, GeoLocation, Longitude, Observation};
pub use destiny_ephem::TabulatedEphemeris;
pub use destiny_time::{Clock, FixedClock, SystemClock};
pub use destiny_transit::{
    NatalChart, SeriesSummary, TransitConfig, TransitRecord, TransitSeries, TransitStatus,
};
pub use destiny_zodiac::{ZodiacIndex, ZodiacSign, sign_of, sign_position};
