//! Index-templated mock user generation.
//!
//! Every field except the identifier suffix is a pure function of the index
//! and the reference instant, so two calls with the same inputs differ only
//! in their identifiers.

use chrono::{DateTime, Days, SecondsFormat, Utc};
use rand::Rng;

use crate::user::{Gender, MockLocation, MockName, MockUser};

/// Number of records produced when the live feed falls back to mock data.
pub const DEFAULT_MOCK_USER_COUNT: usize = 50;

/// Length of the random base-36 suffix appended to each identifier.
pub const ID_SUFFIX_LEN: usize = 9;

const ID_SUFFIX_RADIX: u32 = 36;

const COUNTRY_ROTATION: [&str; 3] = ["USA", "Canada", "Mexico"];

const EVEN_CITY: &str = "New York";
const ODD_CITY: &str = "Los Angeles";

const PORTRAIT_BASE_URL: &str = "https://randomuser.me/api/portraits";

/// Generates `count` mock users relative to `now`.
///
/// Identifier suffixes come from the thread-local RNG, so identifiers are not
/// reproducible across calls. Use [`generate_mock_users_with_rng`] to control
/// them.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use mock_users::generate_mock_users;
///
/// let now = Utc::now();
/// let first = generate_mock_users(3, now);
/// let second = generate_mock_users(3, now);
///
/// // Same names, different identifiers.
/// assert_eq!(first[1].name, second[1].name);
/// assert!(first[1].id.starts_with("mock-id-1-"));
/// ```
#[must_use]
pub fn generate_mock_users(count: usize, now: DateTime<Utc>) -> Vec<MockUser> {
    generate_mock_users_with_rng(count, now, &mut rand::rng())
}

/// Generates `count` mock users relative to `now`, drawing identifier
/// suffixes from `rng`.
#[must_use]
pub fn generate_mock_users_with_rng<R>(count: usize, now: DateTime<Utc>, rng: &mut R) -> Vec<MockUser>
where
    R: Rng + ?Sized,
{
    (0..count)
        .map(|index| generate_single_user(index, now, rng))
        .collect()
}

fn generate_single_user<R>(index: usize, now: DateTime<Utc>, rng: &mut R) -> MockUser
where
    R: Rng + ?Sized,
{
    let gender = gender_for(index);
    let first = match gender {
        Gender::Male => format!("John{index}"),
        Gender::Female => format!("Jane{index}"),
    };
    let last = format!("Doe{index}");
    let email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());

    MockUser {
        id: format!("mock-id-{index}-{}", random_suffix(rng)),
        name: MockName { first, last },
        email,
        phone: format!("555-0101-{index:02}"),
        location: MockLocation {
            country: country_for(index).to_owned(),
            city: city_for(index).to_owned(),
        },
        registered_date: registered_date_for(index, now),
        picture_thumbnail_url: format!("{PORTRAIT_BASE_URL}/{}/{index}.jpg", gender.as_str()),
    }
}

const fn gender_for(index: usize) -> Gender {
    if index.is_multiple_of(2) {
        Gender::Male
    } else {
        Gender::Female
    }
}

fn country_for(index: usize) -> &'static str {
    COUNTRY_ROTATION
        .get(index.rem_euclid(COUNTRY_ROTATION.len()))
        .copied()
        .unwrap_or("USA")
}

const fn city_for(index: usize) -> &'static str {
    if index.is_multiple_of(2) {
        EVEN_CITY
    } else {
        ODD_CITY
    }
}

/// Formats `now - index days` the way browsers render `toISOString`.
fn registered_date_for(index: usize, now: DateTime<Utc>) -> String {
    let days = u64::try_from(index).unwrap_or(u64::MAX);
    now.checked_sub_days(Days::new(days))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn random_suffix<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    (0..ID_SUFFIX_LEN)
        .filter_map(|_| char::from_digit(rng.random_range(0..ID_SUFFIX_RADIX), ID_SUFFIX_RADIX))
        .collect()
}
