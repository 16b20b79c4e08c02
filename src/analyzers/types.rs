//! Result types produced by the aggregators.
//!
//! `None` in any of these means the filtered view had no data for that value.

use serde::Serialize;

/// Most common travel times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub popular_month: Option<String>,
    pub popular_day: Option<String>,
    /// Hour of day, 0 to 23.
    pub popular_hour: Option<u32>,
    /// Set when the month filter already pins every row to one month.
    pub month_filtered: bool,
}

/// Most common stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub popular_start: Option<String>,
    pub popular_end: Option<String>,
    /// Start and end station joined with [`TRIP_SEPARATOR`](super::station::TRIP_SEPARATOR).
    pub popular_trip: Option<String>,
}

/// Total and average trip duration in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_secs: u64,
    pub mean_secs: Option<f64>,
}

/// Number of rows per category of a text column.
///
/// Known categories are always listed, in order, even with a zero count.
/// Unrecognised values follow in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub counts: Vec<(String, usize)>,
    /// Rows with a blank cell.
    pub missing: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: &str) -> usize {
        self.counts
            .iter()
            .find(|(name, _)| name == category)
            .map_or(0, |(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum::<usize>() + self.missing
    }
}

/// Earliest, most recent and most common birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Availability of an optional column's statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Optional<T> {
    /// The city's table has no such column.
    Unavailable,
    /// The column exists but no filtered row has a value.
    NoData,
    Available(T),
}

/// User demographics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// `None` when the filtered view is empty.
    pub user_types: Option<CategoryCounts>,
    pub gender: Optional<CategoryCounts>,
    pub birth_year: Optional<BirthYearStats>,
}
