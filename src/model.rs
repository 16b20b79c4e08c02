//! In-memory trip table.

use chrono::NaiveDateTime;
use serde::Serialize;

/// A single bike-share trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    /// Position of the row in the unfiltered source table.
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Trip duration in whole seconds.
    pub duration_secs: u64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

/// Which optional columns the source table carries.
///
/// Decided once from the header row; individual cells may still be blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// The rows of one city's table together with its schema.
///
/// Filtering produces a new table; the original is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    pub schema: Schema,
    pub rows: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(schema: Schema, rows: Vec<TripRecord>) -> Self {
        Self { schema, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a table with the same schema keeping only rows matching `keep`.
    pub fn filtered<F>(&self, mut keep: F) -> TripTable
    where
        F: FnMut(&TripRecord) -> bool,
    {
        TripTable {
            schema: self.schema,
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }
}
