//! Most popular stations and trips.

use serde::Serialize;
use std::fmt;

use super::utility::{Mode, mode};
use crate::record::TripRecord;

/// A start/end station combination, compared field by field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

impl fmt::Display for StationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationReport {
    pub popular_start: Mode<String>,
    pub popular_end: Mode<String>,
    pub popular_trip: Mode<StationPair>,
}

#[tracing::instrument(name = "station_stats", skip_all, fields(records = records.len()))]
pub fn station_stats(records: &[&TripRecord]) -> Option<StationReport> {
    let popular_start = mode(records.iter().map(|r| r.start_station.as_str()))?;
    let popular_end = mode(records.iter().map(|r| r.end_station.as_str()))?;
    let popular_trip = mode(
        records
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )?;

    Some(StationReport {
        popular_start: Mode {
            value: popular_start.value.to_string(),
            count: popular_start.count,
        },
        popular_end: Mode {
            value: popular_end.value.to_string(),
            count: popular_end.count,
        },
        popular_trip: Mode {
            value: StationPair {
                start: popular_trip.value.0.to_string(),
                end: popular_trip.value.1.to_string(),
            },
            count: popular_trip.count,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::trip_between;

    const T: &str = "2017-05-01 12:00:00";

    #[test]
    fn test_empty_view_has_no_station_stats() {
        assert_eq!(station_stats(&[]), None);
    }

    #[test]
    fn test_popular_stations_and_trip() {
        let records = [
            trip_between(1, T, "Clark St & Lake St", "Streeter Dr & Grand Ave"),
            trip_between(2, T, "Clark St & Lake St", "Millennium Park"),
            trip_between(3, T, "Lake Shore Dr & Monroe St", "Streeter Dr & Grand Ave"),
            trip_between(4, T, "Clark St & Lake St", "Streeter Dr & Grand Ave"),
        ];
        let view: Vec<_> = records.iter().collect();

        let report = station_stats(&view).unwrap();
        assert_eq!(report.popular_start.value, "Clark St & Lake St");
        assert_eq!(report.popular_start.count, 3);
        assert_eq!(report.popular_end.value, "Streeter Dr & Grand Ave");
        assert_eq!(report.popular_end.count, 3);
        assert_eq!(
            report.popular_trip.value,
            StationPair {
                start: "Clark St & Lake St".to_string(),
                end: "Streeter Dr & Grand Ave".to_string(),
            }
        );
        assert_eq!(report.popular_trip.count, 2);
    }

    #[test]
    fn test_pairs_do_not_collide_when_concatenated() {
        // "AB"+"C" and "A"+"BC" are different trips
        let records = [
            trip_between(1, T, "AB", "C"),
            trip_between(2, T, "A", "BC"),
            trip_between(3, T, "X", "Y"),
            trip_between(4, T, "X", "Y"),
        ];
        let view: Vec<_> = records.iter().collect();

        let report = station_stats(&view).unwrap();
        assert_eq!(report.popular_trip.value.to_string(), "X to Y");
        assert_eq!(report.popular_trip.count, 2);
    }
}
