use super::types::DurationStats;
use super::utility::mean;
use crate::model::TripTable;

#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<u64> = table.rows.iter().map(|r| r.duration_secs).collect();

    DurationStats {
        trips: durations.len(),
        total_secs: durations.iter().sum(),
        mean_secs: mean(&durations),
    }
}
