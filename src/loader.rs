//! Reading raw trip rows for a city.

use anyhow::Result;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::city::City;
use crate::error::TripError;
use crate::record::RawTrip;

/// Source of raw rows for a city.
pub trait TripSource {
    fn load(&self, city: City) -> Result<Vec<RawTrip>>;
}

/// Reads `<dir>/<city file>.csv` from disk.
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    dir: PathBuf,
}

impl CsvDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, city: City) -> PathBuf {
        self.dir.join(city.file_name())
    }
}

impl TripSource for CsvDirectory {
    #[tracing::instrument(skip(self), fields(city = %city))]
    fn load(&self, city: City) -> Result<Vec<RawTrip>> {
        let path = self.path_for(city);
        let rows = read_csv_file(&path)?;
        debug!(path = %path.display(), rows = rows.len(), "City data loaded");
        Ok(rows)
    }
}

pub fn read_csv_file(path: &Path) -> Result<Vec<RawTrip>, TripError> {
    let to_error = |source| TripError::Read {
        path: path.to_path_buf(),
        source,
    };
    let rdr = csv::Reader::from_path(path).map_err(to_error)?;
    read_rows(rdr).map_err(to_error)
}

/// Deserializes every row of a headed CSV stream.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawTrip>, csv::Error> {
    read_rows(csv::Reader::from_reader(reader))
}

fn read_rows<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<RawTrip>, csv::Error> {
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: RawTrip = result?;
        rows.push(record);
    }
    Ok(rows)
}
