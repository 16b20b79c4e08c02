use anyhow::Result;

use crate::filter::City;
use crate::model::TripTable;

/// Anything that can produce a city's full, unfiltered trip table.
pub trait TripSource {
    fn load(&self, city: City) -> Result<TripTable>;
}
