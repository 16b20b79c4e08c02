//! Interactive session: prompt for filters, print the report, page raw data,
//! and repeat until the user declines to restart.
//!
//! All I/O goes through the given reader and writer so the loop can be driven
//! by scripted input.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use tracing::{error, info};

use crate::filter::{AVAILABLE_MONTHS, City, DayFilter, FilterSelection, MonthFilter, WEEKDAYS, weekday_name};
use crate::loader::load_data;
use crate::model::TripTable;
use crate::output::{write_report, write_rows};
use crate::paginate::RawDataPager;
use crate::report::TripReport;
use crate::source::TripSource;

/// Reads one trimmed line. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Asks until the answer parses as `T`. `None` at end of input.
pub fn prompt_choice<T, R, W>(input: &mut R, out: &mut W) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "Your choice: ")?;
        out.flush()?;

        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        match answer.parse::<T>() {
            Ok(choice) => return Ok(Some(choice)),
            Err(e) => writeln!(out, "---> Invalid input ({e}). Please try again!")?,
        }
    }
}

/// Yes only for `y` or `yes`, in any case. End of input counts as no.
pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    write!(out, "{question} (y/n): ")?;
    out.flush()?;

    Ok(read_line(input)?
        .map(|a| a.eq_ignore_ascii_case("y") || a.eq_ignore_ascii_case("yes"))
        .unwrap_or(false))
}

/// Prompts for city, month and day. `None` if input ends before all three are given.
pub fn get_filters<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<FilterSelection>> {
    writeln!(out, "\nBikeshare trip analysis")?;
    writeln!(out, "-----------------------\n")?;

    writeln!(out, "Choose a city by name or number:")?;
    for (i, city) in City::ALL.iter().enumerate() {
        writeln!(out, "    {} - {}", i + 1, city)?;
    }
    let Some(city) = prompt_choice::<City, _, _>(input, out)? else {
        return Ok(None);
    };

    writeln!(out, "\nChoose a month by name or number (all = no month filter):")?;
    writeln!(out, "    0 - All")?;
    for (i, month) in AVAILABLE_MONTHS.iter().enumerate() {
        writeln!(out, "    {} - {}", i + 1, month.name())?;
    }
    let Some(month) = prompt_choice::<MonthFilter, _, _>(input, out)? else {
        return Ok(None);
    };

    writeln!(out, "\nChoose a day of week by name or number (all = no day filter):")?;
    writeln!(out, "    0 - All")?;
    for (i, day) in WEEKDAYS.iter().enumerate() {
        writeln!(out, "    {} - {}", i + 1, weekday_name(*day))?;
    }
    let Some(day) = prompt_choice::<DayFilter, _, _>(input, out)? else {
        return Ok(None);
    };

    let selection = FilterSelection::new(city, month, day);
    writeln!(out, "\n--> Analysing {selection}.\n")?;
    Ok(Some(selection))
}

/// Shows five rows at a time while the user keeps asking for more.
pub fn show_raw_data<R: BufRead, W: Write>(input: &mut R, out: &mut W, table: &TripTable) -> Result<()> {
    if table.is_empty() {
        writeln!(out, "No raw data available for this selection.\n")?;
        return Ok(());
    }

    let mut pager = RawDataPager::new(&table.rows);
    let mut question = "Would you like to see five lines of raw data?";

    while ask_yes_no(input, out, question)? {
        match pager.next() {
            Some(page) => write_rows(out, page, table.schema)?,
            None => {
                writeln!(out, "No more rows.")?;
                break;
            }
        }
        if pager.is_exhausted() {
            writeln!(out, "End of data reached.")?;
            break;
        }
        question = "Would you like to see five more lines?";
    }

    writeln!(out)?;
    Ok(())
}

/// Loads, filters and reports on one selection, returning the filtered view.
pub fn analyze<S, W>(source: &S, selection: &FilterSelection, out: &mut W) -> Result<TripTable>
where
    S: TripSource + ?Sized,
    W: Write,
{
    let table = load_data(source, selection)?;
    let report = TripReport::from_table(&table, selection);
    write_report(out, &report)?;
    Ok(table)
}

/// Runs filter-selection, analysis and raw-data paging until the user stops.
#[tracing::instrument(skip_all)]
pub fn run_session<S, R, W>(source: &S, input: &mut R, out: &mut W) -> Result<()>
where
    S: TripSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let mut rounds = 0usize;

    loop {
        let Some(selection) = get_filters(input, out)? else {
            break;
        };
        rounds += 1;

        match analyze(source, &selection, out) {
            Ok(table) => show_raw_data(input, out, &table)?,
            Err(e) => {
                error!(error = %format!("{e:#}"), "Analysis failed");
                writeln!(out, "---> Could not analyse {}: {e:#}\n", selection.city)?;
            }
        }

        if !ask_yes_no(input, out, "Would you like to restart?")? {
            break;
        }
    }

    info!(rounds, "Session finished");
    Ok(())
}
