//! Trip record model: raw CSV rows and the enriched, immutable [`TripRecord`].

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::city::City;
use crate::error::{SelectionError, TripError};

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Longest trip accepted at load. Keeps duration sums far from `u64` overflow.
pub const MAX_TRIP_DURATION_SECS: u64 = u32::MAX as u64;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Month(u8);

impl Month {
    pub fn new(number: u32) -> Option<Self> {
        (1..=12).contains(&number).then_some(Month(number as u8))
    }

    pub fn number(self) -> u32 {
        self.0 as u32
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize - 1]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a full name, a three-letter abbreviation or a number, ignoring case.
impl FromStr for Month {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if let Ok(number) = wanted.parse::<u32>() {
            return Month::new(number).ok_or_else(|| SelectionError::UnknownMonth(wanted.into()));
        }
        MONTH_NAMES
            .iter()
            .position(|name| {
                name.eq_ignore_ascii_case(wanted)
                    || (wanted.len() == 3 && name[..3].eq_ignore_ascii_case(wanted))
            })
            .map(|idx| Month(idx as u8 + 1))
            .ok_or_else(|| SelectionError::UnknownMonth(wanted.into()))
    }
}

/// Day of week, ordered Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Sunday => "Sunday",
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        DayOfWeek::ALL[day.num_days_from_sunday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayOfWeek {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| {
                let name = day.name();
                name.eq_ignore_ascii_case(wanted)
                    || (wanted.len() == 3 && name[..3].eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| SelectionError::UnknownDay(wanted.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Gender {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(g) if g.eq_ignore_ascii_case("male") => Gender::Male,
            Some(g) if g.eq_ignore_ascii_case("female") => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unknown => "Unknown",
        })
    }
}

/// Demographic fields, recorded only by some cities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiderProfile {
    pub gender: Gender,
    pub birth_year: Option<i32>,
}

/// A single row deserialized from a city CSV file.
///
/// `Trip Duration` and `Birth Year` stay textual here and are parsed per row,
/// since some exports write them as decimals (`489.066`, `1992.0`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "", default)]
    pub id: Option<String>,
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: String,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<String>,
}

/// One bike-share trip with its derived calendar fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub id: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub trip_duration_seconds: u64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub rider: Option<RiderProfile>,

    pub month: Month,
    pub day_of_week: DayOfWeek,
    pub hour_of_day: u32,
}

impl TripRecord {
    /// Validates a raw row and attaches the derived fields.
    ///
    /// `row` is the 1-based data row, used only for error reporting.
    pub fn from_raw(row: usize, raw: RawTrip, city: City) -> Result<Self, TripError> {
        let malformed = |reason: String| TripError::MalformedRecord { row, reason };

        let start_time = parse_timestamp(&raw.start_time)
            .ok_or_else(|| malformed(format!("unparseable start time '{}'", raw.start_time)))?;
        let end_time = parse_timestamp(&raw.end_time)
            .ok_or_else(|| malformed(format!("unparseable end time '{}'", raw.end_time)))?;
        if end_time < start_time {
            return Err(malformed(format!(
                "end time {end_time} is before start time {start_time}"
            )));
        }

        let trip_duration_seconds = parse_duration(&raw.trip_duration).ok_or_else(|| {
            malformed(format!("invalid trip duration '{}'", raw.trip_duration))
        })?;

        let rider = if city.has_demographics() {
            let birth_year = match raw.birth_year.as_deref().map(str::trim) {
                None | Some("") => None,
                Some(text) => Some(
                    parse_birth_year(text)
                        .ok_or_else(|| malformed(format!("invalid birth year '{text}'")))?,
                ),
            };
            Some(RiderProfile {
                gender: Gender::parse(raw.gender.as_deref()),
                birth_year,
            })
        } else {
            None
        };

        let month = Month::new(start_time.month())
            .ok_or_else(|| malformed(format!("start time {start_time} has no valid month")))?;

        Ok(TripRecord {
            id: raw.id.filter(|id| !id.is_empty()),
            start_time,
            end_time,
            trip_duration_seconds,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type.filter(|t| !t.trim().is_empty()),
            rider,
            month,
            day_of_week: start_time.weekday().into(),
            hour_of_day: start_time.hour(),
        })
    }
}

/// Enriches every raw row of a city, rejecting the whole load on the first
/// malformed row.
#[tracing::instrument(skip(rows), fields(city = %city, rows = rows.len()))]
pub fn enrich(rows: Vec<RawTrip>, city: City) -> Result<Vec<TripRecord>, TripError> {
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| TripRecord::from_raw(idx + 1, raw, city))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(records = records.len(), "Trip records enriched");
    Ok(records)
}

/// Whole seconds from a possibly fractional duration, bounded by `MAX_TRIP_DURATION_SECS`.
fn parse_duration(text: &str) -> Option<u64> {
    let seconds: f64 = text.trim().parse().ok()?;
    (seconds.is_finite() && (0.0..=MAX_TRIP_DURATION_SECS as f64).contains(&seconds))
        .then(|| seconds.trunc() as u64)
}

fn parse_birth_year(text: &str) -> Option<i32> {
    let year: f64 = text.parse().ok()?;
    (year.is_finite() && (1.0..=9999.0).contains(&year)).then(|| year.trunc() as i32)
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
