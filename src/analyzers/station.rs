use super::types::StationStats;
use super::utility::mode;
use crate::model::TripTable;

/// Joins start and end station names into a trip label.
pub const TRIP_SEPARATOR: &str = " ---> ";

#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn station_stats(table: &TripTable) -> StationStats {
    StationStats {
        popular_start: mode(table.rows.iter().map(|r| r.start_station.as_str())).map(str::to_string),
        popular_end: mode(table.rows.iter().map(|r| r.end_station.as_str())).map(str::to_string),
        popular_trip: mode(
            table
                .rows
                .iter()
                .map(|r| format!("{}{}{}", r.start_station, TRIP_SEPARATOR, r.end_station)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_support::{table, trip};

    #[test]
    fn test_station_stats() {
        let t = table(vec![
            trip("2017-01-02 08:00:00", "Clark St", "Lake St", 10),
            trip("2017-01-02 09:00:00", "Clark St", "State St", 10),
            trip("2017-01-02 10:00:00", "Canal St", "State St", 10),
            trip("2017-01-02 11:00:00", "Clark St", "State St", 10),
        ]);

        let stats = station_stats(&t);
        assert_eq!(stats.popular_start.as_deref(), Some("Clark St"));
        assert_eq!(stats.popular_end.as_deref(), Some("State St"));
        assert_eq!(stats.popular_trip.as_deref(), Some("Clark St ---> State St"));
    }

    #[test]
    fn test_station_stats_empty() {
        let stats = station_stats(&table(vec![]));
        assert_eq!(stats.popular_start, None);
        assert_eq!(stats.popular_end, None);
        assert_eq!(stats.popular_trip, None);
    }
}
