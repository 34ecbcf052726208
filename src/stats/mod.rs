//! Descriptive statistics over a filtered view of trips.
//!
//! The four computations are independent and read-only. Each returns `None`
//! when the view is empty, so an empty selection yields a report of absent
//! sections rather than an error.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;
pub mod utility;

use serde::Serialize;
use tracing::info;

use crate::city::City;
use crate::record::TripRecord;
use duration::{DurationReport, trip_duration_stats};
use station::{StationReport, station_stats};
use time::{TimeReport, time_stats};
use user::{UserReport, user_stats};

pub const DEFAULT_REFERENCE_YEAR: i32 = 2018;

/// Inputs to the statistics that are not part of the trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSettings {
    /// Year that birth years are subtracted from when reporting ages.
    pub reference_year: i32,
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub city: City,
    pub record_count: usize,
    pub time: Option<TimeReport>,
    pub stations: Option<StationReport>,
    pub duration: Option<DurationReport>,
    pub users: Option<UserReport>,
}

impl StatisticsReport {
    #[tracing::instrument(name = "statistics", skip(records), fields(records = records.len()))]
    pub fn compute(records: &[&TripRecord], city: City, settings: &StatsSettings) -> Self {
        let report = Self {
            city,
            record_count: records.len(),
            time: time_stats(records),
            stations: station_stats(records),
            duration: trip_duration_stats(records),
            users: user_stats(records, city.has_demographics(), settings.reference_year),
        };
        info!(
            city = %city,
            records = report.record_count,
            "Statistics computed"
        );
        report
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
