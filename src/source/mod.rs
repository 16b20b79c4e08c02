//! Where trip tables come from.

mod client;
mod csv_dir;

pub use client::TripSource;
pub use csv_dir::CsvDirectory;
