use chrono::Timelike;

use super::types::TimeStats;
use super::utility::mode;
use crate::filter::{MonthFilter, month_name_of, weekday_name_of};
use crate::model::TripTable;

/// Most common month, weekday and start hour of the filtered trips.
///
/// `month` is the filter the table was produced with; it only decides
/// whether the report should note that the popular month is forced.
#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn time_stats(table: &TripTable, month: MonthFilter) -> TimeStats {
    let starts = || table.rows.iter().map(|r| &r.start_time);

    TimeStats {
        popular_month: mode(starts().map(month_name_of)).map(str::to_string),
        popular_day: mode(starts().map(weekday_name_of)).map(str::to_string),
        popular_hour: mode(starts().map(|ts| ts.hour())),
        month_filtered: !month.is_all(),
    }
}
