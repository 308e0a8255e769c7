//! Canonical user record shared by the live and fallback paths.
//!
//! Records are built either by projecting a randomuser.me payload or by
//! converting a [`MockUser`]. Aggregation and rendering never need to know
//! which path produced a record.

use mock_users::MockUser;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Given and family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserName {
    /// Given name, copied verbatim.
    #[schema(example = "Ada")]
    pub first: String,
    /// Family name, copied verbatim.
    #[schema(example = "Lovelace")]
    pub last: String,
}

/// Location reduced to country and city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserLocation {
    /// Country name; empty when upstream omitted it.
    #[schema(example = "Canada")]
    pub country: String,
    /// City name; empty when upstream omitted it.
    #[schema(example = "Toronto")]
    pub city: String,
}

/// Normalised user record.
///
/// ## Invariants
/// - `id` is unique within one batch; nothing is guaranteed across batches.
/// - `email`, `phone` and `picture_thumbnail_url` are not validated.
/// - `registered_date` is meant to be ISO-8601 but may not parse; aggregation
///   treats unparseable values as absent.
///
/// # Examples
/// ```
/// use backend::domain::UserRecord;
/// use chrono::Utc;
/// use mock_users::generate_mock_users;
///
/// let mock = generate_mock_users(1, Utc::now()).remove(0);
/// let record = UserRecord::from(mock);
/// assert_eq!(record.name.first, "John0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Opaque identifier.
    #[schema(example = "5fb6a2c4-5c1e-4c6e-9a43-1d2c0c7fd5d1")]
    pub id: String,
    /// Given and family name.
    pub name: UserName,
    /// Email address.
    #[schema(example = "ada.lovelace@example.com")]
    pub email: String,
    /// Phone number.
    #[schema(example = "(272) 790-0888")]
    pub phone: String,
    /// Country and city.
    pub location: UserLocation,
    /// Registration timestamp as received.
    #[schema(example = "2014-08-19T18:44:29.227Z")]
    pub registered_date: String,
    /// Thumbnail portrait URL.
    #[schema(example = "https://randomuser.me/api/portraits/thumb/women/75.jpg")]
    pub picture_thumbnail_url: String,
}

impl From<MockUser> for UserRecord {
    fn from(value: MockUser) -> Self {
        let MockUser {
            id,
            name,
            email,
            phone,
            location,
            registered_date,
            picture_thumbnail_url,
        } = value;

        Self {
            id,
            name: UserName {
                first: name.first,
                last: name.last,
            },
            email,
            phone,
            location: UserLocation {
                country: location.country,
                city: location.city,
            },
            registered_date,
            picture_thumbnail_url,
        }
    }
}
