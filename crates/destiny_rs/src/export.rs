//! Timeline export as CSV or JSON.

use std::io::Write;

use destiny_transit::{TransitRecord, TransitSeries};
use serde::Serialize;

use crate::DestinyError;

/// Flat, display-ready view of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineRow {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub energy_score: i32,
    pub growth_sign: &'static str,
    pub pressure_sign: &'static str,
    pub status: String,
}

const CSV_HEADER: &str = "date,energy_score,growth_sign,pressure_sign,status";

/// Rows for `records`, labelled with `series`' bodies.
///
/// `records` is usually `series.records()` or the key events.
pub fn timeline_rows(series: &TransitSeries, records: &[TransitRecord]) -> Vec<TimelineRow> {
    records
        .iter()
        .map(|r| TimelineRow {
            date: r.date.format("%Y-%m-%d").to_string(),
            energy_score: r.energy_score,
            growth_sign: r.growth_sign.name(),
            pressure_sign: r.pressure_sign.name(),
            status: series.status_label(r),
        })
        .collect()
}

pub fn write_csv<W: Write>(out: &mut W, rows: &[TimelineRow]) -> Result<(), DestinyError> {
    writeln!(out, "{CSV_HEADER}")?;
    for row in rows {
        writeln!(
            out,
            "{},{},{},{},{}",
            row.date, row.energy_score, row.growth_sign, row.pressure_sign, row.status
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, rows: &[TimelineRow]) -> Result<(), DestinyError> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

/// Fixed-width table for terminals.
pub fn write_table<W: Write>(out: &mut W, rows: &[TimelineRow]) -> Result<(), DestinyError> {
    writeln!(
        out,
        "{:<10}  {:>5}  {:<11}  {:<11}  {}",
        "Date", "Score", "Growth", "Pressure", "Status"
    )?;
    for row in rows {
        writeln!(
            out,
            "{:<10}  {:>5}  {:<11}  {:<11}  {}",
            row.date, row.energy_score, row.growth_sign, row.pressure_sign, row.status
        )?;
    }
    Ok(())
}
