//! Output formatting for statistics reports and raw trip pages.
//!
//! Supports the human-readable text report, JSON serialization, and an
//! aligned table for raw records.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::filter::FilterCriteria;
use crate::record::TripRecord;
use crate::stats::StatisticsReport;
use crate::stats::duration::DurationReport;
use crate::stats::station::StationReport;
use crate::stats::time::TimeReport;
use crate::stats::user::UserReport;

const RULE: &str = "----------------------------------------";
const NO_DATA: &str = "No data for this selection.";

/// Writes any serializable value as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write + ?Sized>(out: &mut W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the four report sections in order.
pub fn render_report<W: Write + ?Sized>(
    out: &mut W,
    report: &StatisticsReport,
    criteria: &FilterCriteria,
) -> Result<()> {
    debug!(records = report.record_count, "Rendering report");
    writeln!(
        out,
        "{} ({}): {} trips",
        report.city, criteria, report.record_count
    )?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nThe Most Frequent Times of Travel\n")?;
    match &report.time {
        Some(time) => render_time(out, time)?,
        None => writeln!(out, "{NO_DATA}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nThe Most Popular Stations and Trip\n")?;
    match &report.stations {
        Some(stations) => render_stations(out, stations)?,
        None => writeln!(out, "{NO_DATA}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nTrip Duration\n")?;
    match &report.duration {
        Some(duration) => render_duration(out, duration)?,
        None => writeln!(out, "{NO_DATA}")?,
    }
    writeln!(out, "{RULE}")?;

    writeln!(out, "\nUser Stats\n")?;
    match &report.users {
        Some(users) => render_users(out, users)?,
        None => writeln!(out, "{NO_DATA}")?,
    }
    writeln!(out, "{RULE}")?;

    Ok(())
}

fn render_time<W: Write + ?Sized>(out: &mut W, time: &TimeReport) -> Result<()> {
    if let Some(month) = &time.popular_month {
        writeln!(out, "The most popular month is {}.", month.value)?;
    }
    if let Some(day) = &time.popular_day {
        writeln!(out, "The most popular day of week is {}.", day.value)?;
    }
    writeln!(out, "The most popular hour of day is {}.", time.popular_hour.value)?;
    Ok(())
}

fn render_stations<W: Write + ?Sized>(out: &mut W, stations: &StationReport) -> Result<()> {
    writeln!(
        out,
        "The most used starting station is {}.",
        stations.popular_start.value
    )?;
    writeln!(
        out,
        "The most used ending station is {}.",
        stations.popular_end.value
    )?;
    writeln!(
        out,
        "The most common combination of stations is {} ({} trips).",
        stations.popular_trip.value, stations.popular_trip.count
    )?;
    Ok(())
}

fn render_duration<W: Write + ?Sized>(out: &mut W, duration: &DurationReport) -> Result<()> {
    writeln!(out, "The total trip duration is {}.", duration.total)?;
    writeln!(out, "The average trip duration is {}.", duration.mean_display())?;
    Ok(())
}

fn render_users<W: Write + ?Sized>(out: &mut W, users: &UserReport) -> Result<()> {
    writeln!(out, "The total count of users for this selection were:")?;
    for row in &users.user_types {
        writeln!(out, "  {:<12} {}", row.value, row.count)?;
    }

    let Some(demographics) = &users.demographics else {
        return Ok(());
    };

    writeln!(out, "The total count of bike riders by gender are:")?;
    for row in &demographics.genders {
        writeln!(out, "  {:<12} {}", row.value.to_string(), row.count)?;
    }

    if let Some(years) = &demographics.birth_years {
        writeln!(
            out,
            "\nThe oldest year of birth was {}, and that person is around {} year(s) old.",
            years.earliest, years.earliest_age
        )?;
        writeln!(
            out,
            "The most recent year of birth was {}, and that person is around {} year(s) old.",
            years.latest, years.latest_age
        )?;
        writeln!(
            out,
            "The most common year of birth was {}.",
            years.most_common.value
        )?;
    }
    Ok(())
}

/// Writes a page of raw trips as a table. `first_row` is the position of the
/// first trip within the filtered view.
pub fn render_page<W: Write + ?Sized>(
    out: &mut W,
    page: &[&TripRecord],
    first_row: usize,
) -> Result<()> {
    if page.is_empty() {
        writeln!(out, "No more trips to show.")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:>6}  {:<10}  {:<19}  {:<19}  {:>8}  {:<30}  {:<30}  {:<10}  {:<7}  {}",
        "#",
        "Trip ID",
        "Start Time",
        "End Time",
        "Duration",
        "Start Station",
        "End Station",
        "User Type",
        "Gender",
        "Birth Year"
    )?;
    for (i, trip) in page.iter().enumerate() {
        let (gender, birth_year) = match &trip.rider {
            Some(p) => (
                p.gender.to_string(),
                p.birth_year.map_or_else(|| "-".to_string(), |y| y.to_string()),
            ),
            None => ("-".to_string(), "-".to_string()),
        };
        writeln!(
            out,
            "{:>6}  {:<10}  {:<19}  {:<19}  {:>8}  {:<30}  {:<30}  {:<10}  {:<7}  {}",
            first_row + i,
            trip.id.as_deref().unwrap_or("-"),
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.end_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.trip_duration_seconds,
            trip.start_station,
            trip.end_station,
            trip.user_type.as_deref().unwrap_or("-"),
            gender,
            birth_year
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::City;
    use crate::filter::{Selection, filter};
    use crate::record::{DayOfWeek, Month};
    use crate::stats::StatsSettings;
    use crate::testing::trip;

    fn render(report: &StatisticsReport, criteria: &FilterCriteria) -> String {
        let mut buf = Vec::new();
        render_report(&mut buf, report, criteria).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_empty_report() {
        let report = StatisticsReport::compute(&[], City::Chicago, &StatsSettings::default());
        let text = render(&report, &FilterCriteria::default());

        assert_eq!(text.matches(NO_DATA).count(), 4);
        assert!(text.starts_with("Chicago (month=all, day=all): 0 trips"));
    }

    #[test]
    fn test_render_full_report() {
        let records = [
            trip(1, "2017-01-02 08:00:00", 60),
            trip(2, "2017-01-09 08:30:00", 120),
            trip(3, "2017-01-16 09:00:00", 180),
        ];
        let criteria = FilterCriteria::new(
            Selection::Only(Month::new(1).unwrap()),
            Selection::Only(DayOfWeek::Monday),
        );
        let view = filter(&records, &criteria);
        let report = StatisticsReport::compute(&view, City::Chicago, &StatsSettings::default());
        let text = render(&report, &criteria);

        assert!(!text.contains("most popular month"));
        assert!(!text.contains("most popular day of week"));
        assert!(text.contains("The most popular hour of day is 8."));
        assert!(text.contains("The average trip duration is 0 hrs 02 min 00 sec."));
        assert!(text.contains("The most common year of birth was 1985."));
        assert!(text.contains("Female"));
        assert!(!text.contains(NO_DATA));
    }

    #[test]
    fn test_render_omits_demographics_for_washington() {
        let mut record = trip(1, "2017-01-02 08:00:00", 60);
        record.rider = None;
        let records = [record];
        let view: Vec<_> = records.iter().collect();
        let report = StatisticsReport::compute(&view, City::Washington, &StatsSettings::default());
        let text = render(&report, &FilterCriteria::default());

        assert!(text.contains("Subscriber"));
        assert!(!text.contains("gender"));
        assert!(!text.contains("year of birth"));
    }

    #[test]
    fn test_write_json_report() {
        let records = [trip(1, "2017-01-02 08:00:00", 60)];
        let view: Vec<_> = records.iter().collect();
        let report = StatisticsReport::compute(&view, City::NewYorkCity, &StatsSettings::default());

        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["city"], "NewYorkCity");
        assert_eq!(value["record_count"], 1);
        assert_eq!(value["duration"]["total_seconds"], 60);
        assert_eq!(value["time"]["popular_month"], serde_json::Value::Null);
    }

    #[test]
    fn test_render_page() {
        let records = [
            trip(1, "2017-01-02 08:00:00", 60),
            trip(2, "2017-01-09 08:30:00", 120),
        ];
        let view: Vec<_> = records.iter().collect();

        let mut buf = Vec::new();
        render_page(&mut buf, &view, 0).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("2017-01-09 08:30:00"));

        let mut buf = Vec::new();
        render_page(&mut buf, &[], 5).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No more trips to show.\n");
    }
}
