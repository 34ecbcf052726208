//! Total and average trip duration.

use serde::Serialize;
use std::fmt;

use super::utility::mean;
use crate::record::TripRecord;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

/// Whole seconds split into 365-day years, days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBreakdown {
    pub years: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            years: total / YEAR,
            days: total % YEAR / DAY,
            hours: total % DAY / HOUR,
            minutes: total % HOUR / MINUTE,
            seconds: total % MINUTE,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.years * YEAR
            + self.days * DAY
            + self.hours * HOUR
            + self.minutes * MINUTE
            + self.seconds
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} years {:02} days {:02} hrs {:02} min {:02} sec",
            self.years, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Renders seconds as hours, minutes and seconds without folding hours into days.
pub fn format_clock(seconds: u64) -> String {
    format!(
        "{} hrs {:02} min {:02} sec",
        seconds / HOUR,
        seconds % HOUR / MINUTE,
        seconds % MINUTE
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub total_seconds: u64,
    pub mean_seconds: f64,
    pub total: DurationBreakdown,
}

impl DurationReport {
    /// The mean floored to whole seconds, formatted as a clock duration.
    pub fn mean_display(&self) -> String {
        format_clock(self.mean_seconds.floor() as u64)
    }
}

#[tracing::instrument(name = "trip_duration_stats", skip_all, fields(records = records.len()))]
pub fn trip_duration_stats(records: &[&TripRecord]) -> Option<DurationReport> {
    if records.is_empty() {
        return None;
    }

    let total_seconds = records.iter().map(|r| r.trip_duration_seconds).sum();
    let durations: Vec<f64> = records
        .iter()
        .map(|r| r.trip_duration_seconds as f64)
        .collect();

    Some(DurationReport {
        total_seconds,
        mean_seconds: mean(&durations),
        total: DurationBreakdown::from_seconds(total_seconds),
    })
}
