//! DTOs for decoding randomuser.me responses.
//!
//! The adapter decodes into these transport DTOs first, then projects them
//! into canonical records in one pass. Nested objects the projection reads
//! (`name`, `location`, `registered`, `picture`) must be present; leaf values
//! are read best-effort and default to an empty string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::{UserLocation, UserName, UserRecord};

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserResponseDto {
    pub(super) results: Vec<RandomUserDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RandomUserDto {
    #[serde(default)]
    id: Option<IdDto>,
    #[serde(default)]
    login: Option<LoginDto>,
    #[serde(default)]
    name: Option<NameDto>,
    #[serde(default, deserialize_with = "lenient_text")]
    email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    phone: String,
    #[serde(default)]
    location: Option<LocationDto>,
    #[serde(default)]
    registered: Option<RegisteredDto>,
    #[serde(default)]
    picture: Option<PictureDto>,
}

#[derive(Debug, Deserialize)]
struct IdDto {
    #[serde(default, deserialize_with = "lenient_text")]
    value: String,
}

#[derive(Debug, Deserialize)]
struct LoginDto {
    #[serde(default, deserialize_with = "lenient_text")]
    uuid: String,
}

#[derive(Debug, Deserialize)]
struct NameDto {
    #[serde(default, deserialize_with = "lenient_text")]
    first: String,
    #[serde(default, deserialize_with = "lenient_text")]
    last: String,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    #[serde(default, deserialize_with = "lenient_text")]
    country: String,
    #[serde(default, deserialize_with = "lenient_text")]
    city: String,
}

#[derive(Debug, Deserialize)]
struct RegisteredDto {
    #[serde(default, deserialize_with = "lenient_text")]
    date: String,
}

#[derive(Debug, Deserialize)]
struct PictureDto {
    #[serde(default, deserialize_with = "lenient_text")]
    thumbnail: String,
}

/// Read a scalar as text; `null` and structured values become empty.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Null | Value::Array(_) | Value::Object(_)) | None => String::new(),
    })
}

impl RandomUserResponseDto {
    pub(super) fn into_domain_users(self) -> Result<Vec<UserRecord>, String> {
        self.results
            .into_iter()
            .enumerate()
            .map(|(index, user)| user.into_domain_user(index))
            .collect()
    }
}

impl RandomUserDto {
    fn into_domain_user(self, index: usize) -> Result<UserRecord, String> {
        let missing = |field: &str| format!("result {index} missing `{field}`");

        let id = match self.id.map(|id| id.value).filter(|value| !value.is_empty()) {
            Some(value) => value,
            None => self.login.ok_or_else(|| missing("login"))?.uuid,
        };
        let name = self.name.ok_or_else(|| missing("name"))?;
        let location = self.location.ok_or_else(|| missing("location"))?;
        let registered = self.registered.ok_or_else(|| missing("registered"))?;
        let picture = self.picture.ok_or_else(|| missing("picture"))?;

        Ok(UserRecord {
            id,
            name: UserName {
                first: name.first,
                last: name.last,
            },
            email: self.email,
            phone: self.phone,
            location: UserLocation {
                country: location.country,
                city: location.city,
            },
            registered_date: registered.date,
            picture_thumbnail_url: picture.thumbnail,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn raw_user() -> Value {
        json!({
            "gender": "female",
            "name": { "title": "Ms", "first": "Louane", "last": "Vidal" },
            "location": {
                "street": { "number": 2479, "name": "Place du 8 Février 1962" },
                "city": "Avignon",
                "state": "Vendée",
                "country": "France",
                "postcode": 78276
            },
            "email": "louane.vidal@example.com",
            "login": { "uuid": "9b7e5f32-9f3e-4a1e-8d4b-8f5c3a9f9d10", "username": "crazybird" },
            "registered": { "date": "2014-08-19T18:44:29.227Z", "age": 11 },
            "phone": "02-62-35-18-98",
            "id": { "name": "INSEE", "value": "2NNaN01776236 16" },
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/88.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/88.jpg"
            }
        })
    }

    fn project(users: Vec<Value>) -> Result<Vec<UserRecord>, String> {
        let dto: RandomUserResponseDto =
            serde_json::from_value(json!({ "results": users, "info": { "results": 1 } }))
                .map_err(|error| error.to_string())?;
        dto.into_domain_users()
    }

    #[test]
    fn projects_every_canonical_field() {
        let users = project(vec![raw_user()]).expect("projection succeeds");
        let user = users.first().expect("one user");

        assert_eq!(user.id, "2NNaN01776236 16");
        assert_eq!(user.name.first, "Louane");
        assert_eq!(user.name.last, "Vidal");
        assert_eq!(user.email, "louane.vidal@example.com");
        assert_eq!(user.phone, "02-62-35-18-98");
        assert_eq!(user.location.country, "France");
        assert_eq!(user.location.city, "Avignon");
        assert_eq!(user.registered_date, "2014-08-19T18:44:29.227Z");
        assert_eq!(
            user.picture_thumbnail_url,
            "https://randomuser.me/api/portraits/thumb/women/88.jpg"
        );
    }

    #[rstest]
    #[case::null_value(json!({ "name": "", "value": null }))]
    #[case::empty_value(json!({ "name": "BSN", "value": "" }))]
    #[case::null_id(Value::Null)]
    fn falls_back_to_login_uuid(#[case] id: Value) {
        let mut user = raw_user();
        user["id"] = id;

        let users = project(vec![user]).expect("projection succeeds");

        assert_eq!(
            users.first().map(|u| u.id.as_str()),
            Some("9b7e5f32-9f3e-4a1e-8d4b-8f5c3a9f9d10")
        );
    }

    #[test]
    fn missing_id_and_login_is_an_error() {
        let mut user = raw_user();
        user["id"] = json!({ "name": "", "value": null });
        if let Some(object) = user.as_object_mut() {
            object.remove("login");
        }

        let error = project(vec![user]).expect_err("projection fails");
        assert_eq!(error, "result 0 missing `login`");
    }

    #[rstest]
    #[case("name")]
    #[case("location")]
    #[case("registered")]
    #[case("picture")]
    fn missing_nested_objects_are_errors(#[case] field: &str) {
        let mut user = raw_user();
        if let Some(object) = user.as_object_mut() {
            object.remove(field);
        }

        let error = project(vec![raw_user(), user]).expect_err("projection fails");
        assert_eq!(error, format!("result 1 missing `{field}`"));
    }

    #[test]
    fn missing_leaves_become_empty_strings() {
        let mut user = raw_user();
        if let Some(object) = user.as_object_mut() {
            object.remove("email");
        }
        user["location"] = json!({ "country": "France" });
        user["phone"] = json!(5551234);

        let users = project(vec![user]).expect("projection succeeds");
        let user = users.first().expect("one user");

        assert_eq!(user.email, "");
        assert_eq!(user.location.city, "");
        assert_eq!(user.phone, "5551234");
    }

    #[test]
    fn missing_results_list_fails_to_decode() {
        let result: Result<RandomUserResponseDto, _> =
            serde_json::from_value(json!({ "error": "Uh oh, something has gone wrong." }));
        assert!(result.is_err());
    }
}
