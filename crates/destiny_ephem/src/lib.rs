//! A concrete ephemeris oracle backed by tabulated longitudes.
//!
//! Positions are read from a JSON table (for example, exported from an
//! external ephemeris service) and interpolated per query. No orbital
//! mechanics are computed here.

pub mod error;
pub mod table;

pub use error::EphemError;
pub use table::{Sample, TabulatedEphemeris};
