use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::client::TripSource;
use crate::filter::City;
use crate::model::TripTable;
use crate::parser::parse_trips;

/// Reads `<dir>/<city>.csv` on every call.
#[derive(Debug, Clone)]
pub struct CsvDirectory(PathBuf);

impl CsvDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.0.join(city.file_name())
    }

    pub fn dir(&self) -> &Path {
        &self.0
    }
}

impl TripSource for CsvDirectory {
    fn load(&self, city: City) -> Result<TripTable> {
        let path = self.path_for(city);
        debug!(path = %path.display(), "Opening trip table");

        let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        parse_trips(file).with_context(|| format!("reading {}", path.display()))
    }
}
