//! Generated mock user types.
//!
//! These types mirror the backend's canonical user record field for field
//! without depending on it.

use serde::{Deserialize, Serialize};

/// Gender used to template names and portrait URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Even indices.
    Male,
    /// Odd indices.
    Female,
}

impl Gender {
    /// Path segment used by the portrait service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Given and family name of a mock user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockName {
    /// Given name, e.g. `John4`.
    pub first: String,
    /// Family name, e.g. `Doe4`.
    pub last: String,
}

/// Country and city of a mock user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockLocation {
    /// One of `USA`, `Canada` or `Mexico`.
    pub country: String,
    /// Either `New York` or `Los Angeles`.
    pub city: String,
}

/// A generated mock user record.
///
/// # Example
///
/// ```
/// use mock_users::{MockLocation, MockName, MockUser};
///
/// let user = MockUser {
///     id: "mock-id-0-abc123xyz".to_owned(),
///     name: MockName { first: "John0".to_owned(), last: "Doe0".to_owned() },
///     email: "john0.doe0@example.com".to_owned(),
///     phone: "555-0101-00".to_owned(),
///     location: MockLocation { country: "USA".to_owned(), city: "New York".to_owned() },
///     registered_date: "2026-10-19T00:00:00.000Z".to_owned(),
///     picture_thumbnail_url: "https://randomuser.me/api/portraits/male/0.jpg".to_owned(),
/// };
///
/// assert_eq!(user.location.country, "USA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockUser {
    /// `mock-id-{index}-{suffix}`; the suffix is random per call.
    pub id: String,
    /// Templated name.
    pub name: MockName,
    /// `{first}.{last}@example.com`, lower-cased.
    pub email: String,
    /// `555-0101-{index:02}`.
    pub phone: String,
    /// Rotating country and alternating city.
    pub location: MockLocation,
    /// ISO-8601 timestamp `index` days before the reference instant.
    pub registered_date: String,
    /// Portrait URL keyed by gender and index.
    pub picture_thumbnail_url: String,
}
