//! Integration tests for loading tables from disk and using them as an oracle.

use std::io::Write;

use approx::assert_relative_eq;
use chrono::{NaiveDate, TimeZone, Utc};
use destiny_core::{Body, EphemerisOracle, Observation, OracleError};
use destiny_ephem::{EphemError, TabulatedEphemeris};

const TABLE: &str = r#"{
  "unit": "degrees",
  "bodies": {
    "jupiter": [
      { "date": "2026-01-01", "longitude": 100.0 },
      { "date": "2026-01-31", "longitude": 103.0 }
    ],
    "Saturn": [
      { "date": "2026-01-01", "longitude": 359.0 },
      { "date": "2026-01-31", "longitude": 1.0 }
    ],
    "moon": [
      { "date": "2026-01-01", "longitude": 10.0 },
      { "date": "2026-01-02", "longitude": 23.0 }
    ]
  }
}"#;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn write_table(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_from_disk() {
    let file = write_table(TABLE);
    let eph = TabulatedEphemeris::load(file.path()).unwrap();
    let bodies: Vec<_> = eph.bodies().collect();
    assert_eq!(bodies, vec![Body::Moon, Body::Jupiter, Body::Saturn]);
    assert_eq!(eph.coverage(Body::Jupiter), Some((d(2026, 1, 1), d(2026, 1, 31))));
    assert_eq!(eph.coverage(Body::Sun), None);
}

#[test]
fn interpolates_mid_table() {
    let eph = TabulatedEphemeris::from_json_str(TABLE).unwrap();
    let lon = eph.longitude(Body::Jupiter, d(2026, 1, 11)).unwrap();
    assert_relative_eq!(lon.to_degrees(), 101.0, epsilon = 1e-9);
    let lon = eph.longitude(Body::Saturn, d(2026, 1, 16)).unwrap();
    assert_relative_eq!(lon.to_degrees(), 0.0, epsilon = 1e-9);
}

#[test]
fn observation_uses_time_of_day() {
    let eph = TabulatedEphemeris::from_json_str(TABLE).unwrap();
    let noon = Observation::new(Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(), None);
    let lon = eph.longitude_at(Body::Moon, &noon).unwrap();
    assert_relative_eq!(lon.to_degrees(), 16.5, epsilon = 1e-9);
    // date-granular query ignores the time of day
    let lon = eph.longitude(Body::Moon, d(2026, 1, 1)).unwrap();
    assert_relative_eq!(lon.to_degrees(), 10.0);
}

#[test]
fn out_of_coverage_and_missing_body() {
    let eph = TabulatedEphemeris::from_json_str(TABLE).unwrap();
    assert_eq!(
        eph.longitude(Body::Jupiter, d(2026, 2, 1)),
        Err(OracleError::OutOfRange { date: d(2026, 2, 1) })
    );
    assert_eq!(
        eph.longitude(Body::Jupiter, d(2025, 12, 31)),
        Err(OracleError::OutOfRange { date: d(2025, 12, 31) })
    );
    assert!(matches!(
        eph.longitude(Body::Mars, d(2026, 1, 5)),
        Err(OracleError::Unavailable(_))
    ));
}

#[test]
fn radians_table_converted_on_load() {
    let table = r#"{ "unit": "radians", "bodies": { "sun": [ { "date": "2026-03-20", "longitude": 3.141592653589793 } ] } }"#;
    let eph = TabulatedEphemeris::from_json_str(table).unwrap();
    let lon = eph.longitude(Body::Sun, d(2026, 3, 20)).unwrap();
    assert_relative_eq!(lon.to_degrees(), 180.0, epsilon = 1e-9);
}

#[test]
fn default_unit_is_degrees() {
    let table = r#"{ "bodies": { "sun": [ { "date": "2026-03-20", "longitude": -30.0 } ] } }"#;
    let eph = TabulatedEphemeris::from_json_str(table).unwrap();
    let lon = eph.longitude(Body::Sun, d(2026, 3, 20)).unwrap();
    assert_relative_eq!(lon.to_degrees(), 330.0);
}

#[test]
fn bad_tables_rejected() {
    assert!(matches!(
        TabulatedEphemeris::from_json_str(r#"{ "bodies": { "ceres": [] } }"#),
        Err(EphemError::UnknownBody(_))
    ));
    assert!(matches!(
        TabulatedEphemeris::from_json_str("not json"),
        Err(EphemError::Parse(_))
    ));
    let missing = std::path::Path::new("/nonexistent/destiny/table.json");
    assert!(matches!(
        TabulatedEphemeris::load(missing),
        Err(EphemError::Io { .. })
    ));
}

#[test]
fn same_body_under_two_spellings_rejected() {
    let table = r#"{ "bodies": {
        "jupiter": [ { "date": "2026-01-01", "longitude": 100.0 } ],
        "Jupiter": [ { "date": "2026-01-01", "longitude": 250.0 } ]
    } }"#;
    match TabulatedEphemeris::from_json_str(table) {
        Err(EphemError::DuplicateBody { body, first, second }) => {
            assert_eq!(body, "Jupiter");
            assert_ne!(first, second);
        }
        other => panic!("expected DuplicateBody, got {other:?}"),
    }
}
