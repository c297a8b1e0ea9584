//! Shared vocabulary for the destiny workspace.
//!
//! This crate provides:
//! - [`Body`], the bodies a chart or scan refers to
//! - [`Longitude`] and [`AngleUnit`], raw oracle output
//! - [`GeoLocation`] and [`Observation`] for natal queries
//! - The [`EphemerisOracle`] trait every position source implements

pub mod body;
pub mod error;
pub mod location;
pub mod longitude;
pub mod oracle;

pub use body::{ALL_BODIES, Body, UnknownBody};
pub use error::{LocationError, OracleError};
pub use location::{GeoLocation, Observation};
pub use longitude::{AngleUnit, Longitude};
pub use oracle::{EphemerisOracle, FnOracle};
