//! Shared fixtures for unit tests.

use chrono::{Duration, NaiveDateTime};

use crate::city::City;
use crate::record::{RawTrip, TripRecord};

pub(crate) fn raw_trip(id: u32, start: &str, duration: u64) -> RawTrip {
    let start_time = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
    let end_time = start_time + Duration::seconds(duration as i64);
    RawTrip {
        id: Some(id.to_string()),
        start_time: start.to_string(),
        end_time: end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
        trip_duration: duration.to_string(),
        start_station: "Canal St & Adams St".to_string(),
        end_station: "Clinton St & Madison St".to_string(),
        user_type: Some("Subscriber".to_string()),
        gender: Some("Female".to_string()),
        birth_year: Some("1985".to_string()),
    }
}

/// A Chicago trip starting at `start` (`%Y-%m-%d %H:%M:%S`) lasting `duration` seconds.
pub(crate) fn trip(id: u32, start: &str, duration: u64) -> TripRecord {
    TripRecord::from_raw(id as usize, raw_trip(id, start, duration), City::Chicago).unwrap()
}

pub(crate) fn trip_between(id: u32, start: &str, from: &str, to: &str) -> TripRecord {
    let mut record = trip(id, start, 300);
    record.start_station = from.to_string();
    record.end_station = to.to_string();
    record
}
