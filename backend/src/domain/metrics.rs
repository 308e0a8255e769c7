//! Summary statistics over a batch of user records.
//!
//! Aggregation is a multiset reduction: it never fails and ignores input
//! order. Missing or unparseable fields are skipped one at a time.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserRecord;

/// Aggregate metrics derived from one user list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Number of records in the batch.
    #[schema(example = 500)]
    pub total_users: usize,
    /// Distinct non-empty countries (exact, case-sensitive).
    #[schema(example = 21)]
    pub unique_countries: usize,
    /// Distinct non-empty cities (exact, case-sensitive).
    #[schema(example = 486)]
    pub unique_cities: usize,
    /// Mean of `current year - registration year`, rounded to 2 places.
    #[schema(example = 11.47)]
    pub avg_registration_years: f64,
}

impl MetricsSnapshot {
    /// Snapshot of an empty batch.
    pub const EMPTY: Self = Self {
        total_users: 0,
        unique_countries: 0,
        unique_cities: 0,
        avg_registration_years: 0.0,
    };
}

/// Compute metrics for `users` relative to `now`.
///
/// Records whose `registered_date` does not parse are left out of both the
/// sum and the denominator of the average. When no record has a usable date
/// the average is `0`.
///
/// # Examples
/// ```
/// use backend::domain::{MetricsSnapshot, aggregate};
/// use chrono::Utc;
///
/// assert_eq!(aggregate(&[], Utc::now()), MetricsSnapshot::EMPTY);
/// ```
pub fn aggregate(users: &[UserRecord], now: DateTime<Utc>) -> MetricsSnapshot {
    let current_year = now.year();
    let mut countries = HashSet::new();
    let mut cities = HashSet::new();
    let mut total_years: i64 = 0;
    let mut dated_users: u32 = 0;

    for user in users {
        if !user.location.country.is_empty() {
            countries.insert(user.location.country.as_str());
        }
        if !user.location.city.is_empty() {
            cities.insert(user.location.city.as_str());
        }
        if let Some(year) = registration_year(&user.registered_date) {
            total_years += i64::from(current_year - year);
            dated_users += 1;
        }
    }

    let avg_registration_years = if dated_users == 0 {
        0.0
    } else {
        round_to_hundredths(total_years as f64 / f64::from(dated_users))
    };

    MetricsSnapshot {
        total_users: users.len(),
        unique_countries: countries.len(),
        unique_cities: cities.len(),
        avg_registration_years,
    }
}

/// Year of a registration timestamp, read in UTC.
///
/// Accepts RFC 3339 timestamps, offset-less timestamps with a `T` or space
/// separator, bare dates and bare four-digit years.
fn registration_year(raw: &str) -> Option<i32> {
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc).year());
    }
    if let Some(parsed) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(parsed.year());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date.year());
    }
    bare_year(trimmed)
}

fn bare_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 && raw.bytes().all(|byte| byte.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{UserLocation, UserName};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 30, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn user(country: &str, city: &str, registered_date: &str) -> UserRecord {
        UserRecord {
            id: format!("{country}-{city}-{registered_date}"),
            name: UserName {
                first: "Test".to_owned(),
                last: "User".to_owned(),
            },
            email: "test@example.com".to_owned(),
            phone: "555-0000".to_owned(),
            location: UserLocation {
                country: country.to_owned(),
                city: city.to_owned(),
            },
            registered_date: registered_date.to_owned(),
            picture_thumbnail_url: "https://example.test/t.jpg".to_owned(),
        }
    }

    #[rstest]
    fn empty_input_yields_zeroes(now: DateTime<Utc>) {
        assert_eq!(aggregate(&[], now), MetricsSnapshot::EMPTY);
    }

    #[rstest]
    fn counts_distinct_countries(now: DateTime<Utc>) {
        let users = vec![
            user("USA", "Austin", "2020-01-01T00:00:00Z"),
            user("USA", "Boston", "2020-01-01T00:00:00Z"),
            user("Canada", "Austin", "2020-01-01T00:00:00Z"),
        ];

        let snapshot = aggregate(&users, now);

        assert_eq!(snapshot.total_users, 3);
        assert_eq!(snapshot.unique_countries, 2);
        assert_eq!(snapshot.unique_cities, 2);
    }

    #[rstest]
    fn country_comparison_is_case_sensitive(now: DateTime<Utc>) {
        let users = vec![user("USA", "x", ""), user("usa", "x", "")];
        assert_eq!(aggregate(&users, now).unique_countries, 2);
    }

    #[rstest]
    fn empty_locations_contribute_nothing(now: DateTime<Utc>) {
        let users = vec![user("", "", ""), user("Mexico", "", "")];

        let snapshot = aggregate(&users, now);

        assert_eq!(snapshot.total_users, 2);
        assert_eq!(snapshot.unique_countries, 1);
        assert_eq!(snapshot.unique_cities, 0);
    }

    #[rstest]
    fn one_year_old_registration_counts_as_one(now: DateTime<Utc>) {
        let registered = now
            .with_year(now.year() - 1)
            .expect("previous year exists")
            .to_rfc3339();
        let users = vec![user("USA", "x", &registered)];

        assert_eq!(aggregate(&users, now).avg_registration_years, 1.0);
    }

    #[rstest]
    #[case::empty("")]
    #[case::garbage("not a date")]
    #[case::out_of_range("2020-13-45")]
    fn unparseable_dates_are_excluded_from_average(now: DateTime<Utc>, #[case] raw: &str) {
        let users = vec![
            user("USA", "x", "2016-03-01T10:00:00.000Z"),
            user("USA", "x", raw),
        ];

        let snapshot = aggregate(&users, now);

        assert_eq!(snapshot.total_users, 2);
        assert_eq!(snapshot.avg_registration_years, 10.0);
    }

    #[rstest]
    fn average_is_zero_when_no_date_parses(now: DateTime<Utc>) {
        let users = vec![user("USA", "x", ""), user("USA", "x", "soon")];
        assert_eq!(aggregate(&users, now).avg_registration_years, 0.0);
    }

    #[rstest]
    fn average_rounds_to_two_places(now: DateTime<Utc>) {
        let users = vec![
            user("A", "a", "2025-01-01T00:00:00Z"),
            user("B", "b", "2025-01-01T00:00:00Z"),
            user("C", "c", "2024-01-01"),
        ];

        // (1 + 1 + 2) / 3 = 1.333...
        assert_eq!(aggregate(&users, now).avg_registration_years, 1.33);
    }

    #[rstest]
    fn aggregation_ignores_input_order(now: DateTime<Utc>) {
        let users = vec![
            user("USA", "New York", "2010-05-05T00:00:00Z"),
            user("Canada", "Toronto", "2019-05-05T00:00:00Z"),
            user("USA", "Austin", "bogus"),
            user("Mexico", "Toronto", "2001-02-03"),
        ];
        let mut reversed = users.clone();
        reversed.reverse();
        let mut rotated = users.clone();
        rotated.rotate_left(2);

        let expected = aggregate(&users, now);
        assert_eq!(aggregate(&reversed, now), expected);
        assert_eq!(aggregate(&rotated, now), expected);
    }

    #[rstest]
    #[case::rfc3339_utc("2014-08-19T18:44:29.227Z", Some(2014))]
    #[case::offset_crosses_new_year("2014-12-31T23:30:00-02:00", Some(2015))]
    #[case::naive("2014-08-19T18:44:29", Some(2014))]
    #[case::space_separated("2014-08-19 18:44:29", Some(2014))]
    #[case::space_separated_fraction("2014-08-19 18:44:29.5", Some(2014))]
    #[case::date_only("2014-08-19", Some(2014))]
    #[case::bare_year("2014", Some(2014))]
    #[case::short_number("201", None)]
    #[case::padded(" 2014-08-19 ", Some(2014))]
    #[case::empty("", None)]
    fn reads_registration_year(#[case] raw: &str, #[case] expected: Option<i32>) {
        assert_eq!(registration_year(raw), expected);
    }
}
