use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::types::{DurationStats, StationStats, TimeStats, UserStats};
use crate::analyzers::{duration_stats, station_stats, time_stats, user_stats};
use crate::filter::{City, FilterSelection};
use crate::model::TripTable;

/// Everything computed for one filtered view of a city's trips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub generated_at: DateTime<Utc>,
    pub city: City,
    pub month: String,
    pub day: String,
    pub trips: usize,

    pub times: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

impl TripReport {
    /// Runs every aggregator over `table`, which must already be filtered by `selection`.
    #[tracing::instrument(skip_all, fields(city = %selection.city, rows = table.len()))]
    pub fn from_table(table: &TripTable, selection: &FilterSelection) -> Self {
        TripReport {
            generated_at: Utc::now(),
            city: selection.city,
            month: selection.month.to_string(),
            day: selection.day.to_string(),
            trips: table.len(),
            times: time_stats(table, selection.month),
            stations: station_stats(table),
            durations: duration_stats(table),
            users: user_stats(table),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.trips == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::Optional;
    use crate::filter::{DayFilter, MonthFilter};
    use crate::model::Schema;

    #[test]
    fn test_report_from_empty_table() {
        let table = TripTable::new(
            Schema {
                has_gender: true,
                has_birth_year: true,
            },
            vec![],
        );
        let selection = FilterSelection::new(City::Chicago, MonthFilter::All, DayFilter::All);

        let report = TripReport::from_table(&table, &selection);

        assert!(report.is_empty());
        assert_eq!(report.times.popular_month, None);
        assert_eq!(report.stations.popular_trip, None);
        assert_eq!(report.durations.total_secs, 0);
        assert_eq!(report.durations.mean_secs, None);
        assert_eq!(report.users.user_types, None);
        assert_eq!(report.users.gender, Optional::NoData);
        assert_eq!(report.users.birth_year, Optional::NoData);
    }

    #[test]
    fn test_report_serializes_no_data_as_null() {
        let selection = FilterSelection::whole_city(City::Washington);
        let report = TripReport::from_table(&TripTable::default(), &selection);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["city"], "washington");
        assert!(json["durations"]["mean_secs"].is_null());
        assert_eq!(json["users"]["gender"]["status"], "unavailable");
    }
}
