//! CSV parser for bike-share trip tables.

use std::io::Read;

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Schema, TripRecord, TripTable};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

const REQUIRED_COLUMNS: &[&str] = &[START_TIME, TRIP_DURATION, START_STATION, END_STATION, USER_TYPE];

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A row as it appears in the file, before validation.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Parses a start/end timestamp such as `2017-01-01 09:07:57`.
///
/// # Errors
///
/// Returns an error if the text matches none of the accepted layouts.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .with_context(|| format!("invalid timestamp '{text}'"))
}

/// Reads a whole trip table from CSV.
///
/// Column presence for `Gender` and `Birth Year` is taken from the header row.
///
/// # Errors
///
/// Returns an error if a required column is missing or any row is malformed.
pub fn parse_trips<R: Read>(reader: R) -> Result<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    for column in REQUIRED_COLUMNS {
        if !has_column(column) {
            bail!("missing required column '{column}'");
        }
    }

    let schema = Schema {
        has_gender: has_column(GENDER),
        has_birth_year: has_column(BIRTH_YEAR),
    };
    debug!(?schema, "CSV header parsed");

    let mut rows = Vec::new();
    for (row, result) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = result.with_context(|| format!("malformed trip at row {row}"))?;
        let record = validate(row, raw, schema).with_context(|| format!("invalid trip at row {row}"))?;
        rows.push(record);
    }

    Ok(TripTable::new(schema, rows))
}

fn validate(row: usize, raw: RawTrip, schema: Schema) -> Result<TripRecord> {
    let start_time = parse_timestamp(&raw.start_time)?;

    if !raw.trip_duration.is_finite() || raw.trip_duration < 0.0 {
        bail!("invalid trip duration {}", raw.trip_duration);
    }

    let birth_year = if schema.has_birth_year {
        raw.birth_year
            .filter(|y| y.is_finite())
            .map(|y| y.round() as i32)
    } else {
        None
    };

    Ok(TripRecord {
        row,
        start_time,
        end_time: non_blank(raw.end_time),
        duration_secs: raw.trip_duration.round() as u64,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: non_blank(raw.user_type),
        gender: if schema.has_gender {
            non_blank(raw.gender)
        } else {
            None
        },
        birth_year,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Customer,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
";

    #[test]
    fn test_parse_timestamp_formats() {
        let a = parse_timestamp("2017-01-01 09:07:57").unwrap();
        let b = parse_timestamp("2017-01-01T09:07:57").unwrap();
        assert_eq!(a, b);
        assert!(parse_timestamp("2017-01-01 09:07").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_parse_table_with_optional_columns() {
        let table = parse_trips(CHICAGO.as_bytes()).unwrap();

        assert_eq!(table.len(), 3);
        assert!(table.schema.has_gender);
        assert!(table.schema.has_birth_year);

        let first = &table.rows[0];
        assert_eq!(first.row, 0);
        assert_eq!(first.duration_secs, 321);
        assert_eq!(first.start_station, "Wood St & Hubbard St");
        assert_eq!(first.gender.as_deref(), Some("Male"));
        assert_eq!(first.birth_year, Some(1992));

        let last = &table.rows[2];
        assert_eq!(last.user_type.as_deref(), Some("Customer"));
        assert_eq!(last.gender, None);
        assert_eq!(last.birth_year, None);
    }

    #[test]
    fn test_parse_table_without_optional_columns() {
        let table = parse_trips(WASHINGTON.as_bytes()).unwrap();

        assert_eq!(table.schema, Schema::default());
        assert_eq!(table.rows[0].duration_secs, 489);
        assert_eq!(table.rows[0].gender, None);
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "Start Time,End Station\n2017-01-01 00:00:00,A\n";
        let err = parse_trips(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Trip Duration"));
    }

    #[test]
    fn test_bad_timestamp_is_fatal() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
not a date,10,A,B,Subscriber
";
        let err = parse_trips(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_negative_duration_is_fatal() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,-5,A,B,Subscriber
";
        assert!(parse_trips(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n";
        let table = parse_trips(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
    }
}
