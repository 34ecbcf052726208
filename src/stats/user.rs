//! Rider statistics: user types and, where recorded, gender and birth year.

use serde::Serialize;

use super::utility::{Frequency, Mode, frequencies, mode};
use crate::record::{Gender, TripRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    pub user_types: Vec<Frequency<String>>,
    /// `None` when the city does not record demographics.
    pub demographics: Option<Demographics>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demographics {
    pub genders: Vec<Frequency<Gender>>,
    /// `None` when no trip in the view has a birth year.
    pub birth_years: Option<BirthYearReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearReport {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: Mode<i32>,
    pub earliest_age: i32,
    pub latest_age: i32,
    pub reference_year: i32,
}

/// `has_demographics` is the city's capability; `reference_year` anchors the
/// reported ages.
#[tracing::instrument(name = "user_stats", skip(records), fields(records = records.len()))]
pub fn user_stats(
    records: &[&TripRecord],
    has_demographics: bool,
    reference_year: i32,
) -> Option<UserReport> {
    if records.is_empty() {
        return None;
    }

    let user_types = frequencies(records.iter().filter_map(|r| r.user_type.as_deref()))
        .into_iter()
        .map(|f| Frequency {
            value: f.value.to_string(),
            count: f.count,
        })
        .collect();

    let demographics = has_demographics.then(|| {
        let riders = || records.iter().filter_map(|r| r.rider.as_ref());
        Demographics {
            genders: frequencies(riders().map(|p| p.gender)),
            birth_years: birth_years(riders().filter_map(|p| p.birth_year), reference_year),
        }
    });

    Some(UserReport {
        user_types,
        demographics,
    })
}

fn birth_years(
    years: impl Iterator<Item = i32> + Clone,
    reference_year: i32,
) -> Option<BirthYearReport> {
    let earliest = years.clone().min()?;
    let latest = years.clone().max()?;
    let most_common = mode(years)?;

    Some(BirthYearReport {
        earliest,
        latest,
        most_common,
        earliest_age: reference_year - earliest,
        latest_age: reference_year - latest,
        reference_year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RiderProfile;
    use crate::testing::trip;

    fn rider(id: u32, user_type: Option<&str>, gender: Gender, year: Option<i32>) -> TripRecord {
        let mut record = trip(id, "2017-02-01 10:00:00", 600);
        record.user_type = user_type.map(str::to_string);
        record.rider = Some(RiderProfile {
            gender,
            birth_year: year,
        });
        record
    }

    #[test]
    fn test_empty_view_has_no_user_stats() {
        assert_eq!(user_stats(&[], true, 2018), None);
    }

    #[test]
    fn test_full_demographics() {
        let records = [
            rider(1, Some("Subscriber"), Gender::Male, Some(1989)),
            rider(2, Some("Customer"), Gender::Female, Some(1950)),
            rider(3, Some("Subscriber"), Gender::Male, Some(1989)),
            rider(4, None, Gender::Unknown, None),
            rider(5, Some("Subscriber"), Gender::Female, Some(2001)),
        ];
        let view: Vec<_> = records.iter().collect();

        let report = user_stats(&view, true, 2018).unwrap();
        assert_eq!(
            report.user_types,
            vec![
                Frequency {
                    value: "Subscriber".to_string(),
                    count: 3
                },
                Frequency {
                    value: "Customer".to_string(),
                    count: 1
                },
            ]
        );

        let demographics = report.demographics.unwrap();
        assert_eq!(
            demographics.genders,
            vec![
                Frequency {
                    value: Gender::Male,
                    count: 2
                },
                Frequency {
                    value: Gender::Female,
                    count: 2
                },
                Frequency {
                    value: Gender::Unknown,
                    count: 1
                },
            ]
        );

        let years = demographics.birth_years.unwrap();
        assert_eq!(years.earliest, 1950);
        assert_eq!(years.latest, 2001);
        assert_eq!(years.most_common, Mode { value: 1989, count: 2 });
        assert_eq!(years.earliest_age, 68);
        assert_eq!(years.latest_age, 17);
    }

    #[test]
    fn test_reference_year_is_configurable() {
        let records = [rider(1, Some("Subscriber"), Gender::Male, Some(1990))];
        let view: Vec<_> = records.iter().collect();

        let report = user_stats(&view, true, 2030).unwrap();
        let years = report.demographics.unwrap().birth_years.unwrap();
        assert_eq!(years.earliest_age, 40);
        assert_eq!(years.reference_year, 2030);
    }

    #[test]
    fn test_no_birth_years_recorded() {
        let records = [rider(1, Some("Customer"), Gender::Unknown, None)];
        let view: Vec<_> = records.iter().collect();

        let report = user_stats(&view, true, 2018).unwrap();
        let demographics = report.demographics.unwrap();
        assert_eq!(demographics.birth_years, None);
        assert_eq!(demographics.genders.len(), 1);
    }

    #[test]
    fn test_city_without_demographics_reports_user_types_only() {
        let mut record = trip(1, "2017-02-01 10:00:00", 600);
        record.rider = None;
        let records = [record];
        let view: Vec<_> = records.iter().collect();

        let report = user_stats(&view, false, 2018).unwrap();
        assert_eq!(report.user_types.len(), 1);
        assert_eq!(report.demographics, None);
    }
}
