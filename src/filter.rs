//! Month and day-of-week filtering over a loaded city.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::record::{DayOfWeek, Month, TripRecord};

/// Either every value of a field, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str("all"),
            Selection::Only(value) => value.fmt(f),
        }
    }
}

/// `"all"` in any case selects everything; anything else is parsed as `T`.
impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FilterCriteria {
    pub month: Selection<Month>,
    pub day: Selection<DayOfWeek>,
}

impl FilterCriteria {
    pub fn new(month: Selection<Month>, day: Selection<DayOfWeek>) -> Self {
        Self { month, day }
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        self.month.admits(&record.month) && self.day.admits(&record.day_of_week)
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month={}, day={}", self.month, self.day)
    }
}

/// Returns the records matching `criteria`, in their original order.
pub fn filter<'a>(records: &'a [TripRecord], criteria: &FilterCriteria) -> Vec<&'a TripRecord> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}
