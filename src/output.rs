//! Output formatting for trip reports and raw rows.
//!
//! Supports a human readable text layout and pretty-printed JSON.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use crate::analyzers::types::{CategoryCounts, Optional};
use crate::model::{Schema, TripRecord};
use crate::report::TripReport;

const NO_DATA: &str = "no data";

fn or_no_data<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| v.to_string())
}

fn line<W: Write>(out: &mut W, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "    {label:<48} {value}")
}

fn write_counts<W: Write>(out: &mut W, noun: &str, counts: &CategoryCounts) -> io::Result<()> {
    for (category, n) in &counts.counts {
        line(out, &format!("Number of {noun} '{category}':"), n)?;
    }
    if counts.missing > 0 {
        line(out, &format!("Rows without {noun}:"), counts.missing)?;
    }
    Ok(())
}

/// Writes the four report sections as text.
pub fn write_report<W: Write>(out: &mut W, report: &TripReport) -> io::Result<()> {
    writeln!(
        out,
        "--> {} trips in {} (month {}, day of week {})\n",
        report.trips, report.city, report.month, report.day
    )?;

    let times = &report.times;
    writeln!(out, "--> Most frequent times of travel")?;
    line(out, "Most common month:", or_no_data(times.popular_month.as_ref()))?;
    if times.month_filtered && times.popular_month.is_some() {
        line(out, "", "(the data is filtered to this month)")?;
    }
    line(out, "Most common day of week:", or_no_data(times.popular_day.as_ref()))?;
    line(out, "Most common start hour:", or_no_data(times.popular_hour))?;
    writeln!(out)?;

    let stations = &report.stations;
    writeln!(out, "--> Most popular stations and trip")?;
    line(out, "Most common start station:", or_no_data(stations.popular_start.as_ref()))?;
    line(out, "Most common end station:", or_no_data(stations.popular_end.as_ref()))?;
    line(out, "Most common trip:", or_no_data(stations.popular_trip.as_ref()))?;
    writeln!(out)?;

    let durations = &report.durations;
    writeln!(out, "--> Trip duration")?;
    line(out, "Total duration:", format!("{} seconds", durations.total_secs))?;
    line(
        out,
        "Average duration:",
        durations
            .mean_secs
            .map_or_else(|| NO_DATA.to_string(), |m| format!("{m:.1} seconds")),
    )?;
    writeln!(out)?;

    let users = &report.users;
    writeln!(out, "--> User stats")?;
    match &users.user_types {
        Some(counts) => write_counts(out, "user type", counts)?,
        None => line(out, "User types:", NO_DATA)?,
    }

    match &users.gender {
        Optional::Available(counts) => write_counts(out, "gender", counts)?,
        Optional::NoData => line(out, "Gender:", NO_DATA)?,
        Optional::Unavailable => line(out, "Gender:", "not available for this city")?,
    }

    match &users.birth_year {
        Optional::Available(years) => {
            line(out, "Earliest birth year:", years.earliest)?;
            line(out, "Most recent birth year:", years.most_recent)?;
            line(out, "Most common birth year:", years.most_common)?;
        }
        Optional::NoData => line(out, "Birth year:", NO_DATA)?,
        Optional::Unavailable => line(out, "Birth year:", "not available for this city")?,
    }
    writeln!(out)?;

    Ok(())
}

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &TripReport) {
    debug!("{:#?}", report);
}

/// Writes raw rows, one per line, prefixed with their source row number.
pub fn write_rows<W: Write>(out: &mut W, rows: &[TripRecord], schema: Schema) -> io::Result<()> {
    for trip in rows {
        write!(
            out,
            "{:>8}  {}  {}  {:>7}s  {} ---> {}  {}",
            trip.row,
            trip.start_time.format("%Y-%m-%d %H:%M:%S"),
            trip.end_time.as_deref().unwrap_or("-"),
            trip.duration_secs,
            trip.start_station,
            trip.end_station,
            trip.user_type.as_deref().unwrap_or("-"),
        )?;
        if schema.has_gender {
            write!(out, "  {}", trip.gender.as_deref().unwrap_or("-"))?;
        }
        if schema.has_birth_year {
            match trip.birth_year {
                Some(year) => write!(out, "  {year}")?,
                None => write!(out, "  -")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
