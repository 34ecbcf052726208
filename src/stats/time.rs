//! Most frequent times of travel.

use serde::Serialize;

use super::utility::{Mode, distinct, mode};
use crate::record::{DayOfWeek, Month, TripRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeReport {
    /// Omitted when the view covers a single month.
    pub popular_month: Option<Mode<Month>>,
    /// Omitted when the view covers a single day of week.
    pub popular_day: Option<Mode<DayOfWeek>>,
    pub popular_hour: Mode<u32>,
}

#[tracing::instrument(name = "time_stats", skip_all, fields(records = records.len()))]
pub fn time_stats(records: &[&TripRecord]) -> Option<TimeReport> {
    let popular_hour = mode(records.iter().map(|r| r.hour_of_day))?;

    let months = || records.iter().map(|r| r.month);
    let popular_month = if distinct(months()) > 1 {
        mode(months())
    } else {
        None
    };

    let days = || records.iter().map(|r| r.day_of_week);
    let popular_day = if distinct(days()) > 1 {
        mode(days())
    } else {
        None
    };

    Some(TimeReport {
        popular_month,
        popular_day,
        popular_hour,
    })
}
