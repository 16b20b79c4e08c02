//! The four trip aggregators.
//!
//! Each one is a pure function of a (filtered) [`TripTable`](crate::model::TripTable)
//! and its schema, and reports missing data as `None` or [`types::Optional`]
//! rather than failing on empty input.

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;

pub use duration::duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use user::user_stats;
