//! UTC date/datetime parsing for CLI and config input.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::TimeError;

/// Parse a UTC instant.
///
/// Accepts RFC 3339 (`2024-03-20T12:00:00Z`, with or without offset),
/// a naive `YYYY-MM-DDThh:mm:ss` taken as UTC, or a bare `YYYY-MM-DD`
/// taken as midnight UTC.
pub fn parse_utc(input: &str) -> Result<DateTime<Utc>, TimeError> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    parse_date(s).map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a bare `YYYY-MM-DD` calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| TimeError::InvalidDate {
        input: input.to_string(),
    })
}
