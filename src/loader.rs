//! Loading a city's trips and narrowing them to the selected month and day.

use anyhow::Result;
use tracing::info;

use crate::filter::{DayFilter, FilterSelection, MonthFilter};
use crate::model::TripTable;
use crate::source::TripSource;

/// Keeps the rows whose start time falls in `month` and on `day`.
///
/// An empty result is valid.
pub fn apply_filter(table: &TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    if month.is_all() && day.is_all() {
        return table.clone();
    }
    table.filtered(|trip| month.matches(&trip.start_time) && day.matches(&trip.start_time))
}

/// Loads the selected city from `source` and applies the month/day filters.
#[tracing::instrument(skip(source), fields(city = %selection.city, month = %selection.month, day = %selection.day))]
pub fn load_data<S: TripSource + ?Sized>(source: &S, selection: &FilterSelection) -> Result<TripTable> {
    let table = source.load(selection.city)?;
    let filtered = apply_filter(&table, selection.month, selection.day);

    info!(
        total_rows = table.len(),
        filtered_rows = filtered.len(),
        has_gender = table.schema.has_gender,
        has_birth_year = table.schema.has_birth_year,
        "Trip table loaded and filtered"
    );

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::City;
    use crate::model::{Schema, TripRecord};
    use crate::parser::parse_timestamp;
    use chrono::{Month, Weekday};

    fn trip(row: usize, start: &str, duration: u64) -> TripRecord {
        TripRecord {
            row,
            start_time: parse_timestamp(start).unwrap(),
            end_time: None,
            duration_secs: duration,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }

    fn sample() -> TripTable {
        TripTable::new(
            Schema::default(),
            vec![
                trip(0, "2017-01-02 08:00:00", 100), // Monday
                trip(1, "2017-01-03 09:00:00", 200), // Tuesday
                trip(2, "2017-02-06 10:00:00", 300), // Monday
                trip(3, "2017-02-07 11:00:00", 400), // Tuesday
                trip(4, "2017-01-09 12:00:00", 500), // Monday
            ],
        )
    }

    struct Fixed(TripTable);

    impl TripSource for Fixed {
        fn load(&self, _city: City) -> Result<TripTable> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_all_all_is_identity() {
        let table = sample();
        assert_eq!(apply_filter(&table, MonthFilter::All, DayFilter::All), table);
    }

    #[test]
    fn test_month_filter_keeps_only_that_month() {
        let table = sample();
        let jan = apply_filter(&table, MonthFilter::Only(Month::January), DayFilter::All);

        let rows: Vec<usize> = jan.rows.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 1, 4]);
    }

    #[test]
    fn test_month_and_day_intersect() {
        let table = sample();
        let filtered = apply_filter(
            &table,
            MonthFilter::Only(Month::January),
            DayFilter::Only(Weekday::Mon),
        );

        let rows: Vec<usize> = filtered.rows.iter().map(|r| r.row).collect();
        assert_eq!(rows, vec![0, 4]);
        for trip in &filtered.rows {
            assert!(MonthFilter::Only(Month::January).matches(&trip.start_time));
            assert!(DayFilter::Only(Weekday::Mon).matches(&trip.start_time));
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let table = sample();
        let filtered = apply_filter(&table, MonthFilter::Only(Month::June), DayFilter::All);
        assert!(filtered.is_empty());
        assert_eq!(filtered.schema, table.schema);
    }

    #[test]
    fn test_every_selection_shrinks_or_keeps_rows() {
        let source = Fixed(sample());
        for month in ["0", "1", "2", "3"] {
            for day in ["0", "1", "2", "7"] {
                let selection = FilterSelection::new(
                    City::Chicago,
                    month.parse().unwrap(),
                    day.parse().unwrap(),
                );
                let filtered = load_data(&source, &selection).unwrap();
                assert!(filtered.len() <= source.0.len());
                assert!(filtered.rows.iter().all(|r| selection.matches(&r.start_time)));
            }
        }
    }
}
