//! Error types for loading ephemeris tables.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors while loading or validating a longitude table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EphemError {
    #[error("failed to read ephemeris table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed ephemeris table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown body '{0}' in ephemeris table")]
    UnknownBody(String),
    #[error("body {body} listed twice in ephemeris table ('{first}' and '{second}')")]
    DuplicateBody {
        body: String,
        first: String,
        second: String,
    },
    #[error("body {0} has no samples")]
    EmptyBody(String),
    #[error("samples for {body} are not strictly ascending at {date}")]
    NotAscending { body: String, date: NaiveDate },
    #[error("non-finite longitude for {body} at {date}")]
    NonFinite { body: String, date: NaiveDate },
}
