//! The fixed catalogue of cities with bikeshare data.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::SelectionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
pub enum City {
    Chicago,
    #[value(alias = "nyc")]
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// CSV file name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the city's data carries `Gender` and `Birth Year` columns.
    pub fn has_demographics(self) -> bool {
        !matches!(self, City::Washington)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        City::ALL
            .into_iter()
            .find(|city| city.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SelectionError::UnknownCity(wanted.to_string()))
    }
}
