use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Id handed to every user accepted by `POST /api/users`. Nothing is stored.
pub const CREATED_USER_ID: u64 = 3;

const DIRECTORY: [(u64, &str, &str); 2] = [
    (1, "John", "john@example.com"),
    (2, "Jane", "jane@example.com"),
];

/// # User Record
///
/// `createdAt` is only present on a freshly created user.
///
/// ## Example JSON
/// ```json
/// {
///   "id": 3,
///   "name": "Bob",
///   "email": "bob@example.com",
///   "createdAt": "2024-03-10T15:30:45.123Z"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// The fixed listing, in listing order.
    pub fn directory() -> Vec<User> {
        DIRECTORY
            .iter()
            .map(|&(id, name, email)| User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                created_at: None,
            })
            .collect()
    }
}

/// Body of `POST /api/users`. Both fields are optional at the decoding layer so
/// that a missing or `null` field reaches validation instead of failing to parse.
/// Any JSON value other than a string (`false`, `0`, `123`, objects) is treated as missing.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CreateUserRequest {
    #[serde(default, deserialize_with = "string_or_missing")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_missing")]
    pub email: Option<String>,
}

fn string_or_missing<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) => Ok(Some(value)),
        _ => Ok(None),
    }
}

impl CreateUserRequest {
    /// Returns `(name, email)` when both are present and non-empty.
    pub fn required_fields(self) -> Option<(String, String)> {
        let name = self.name.filter(|name| !name.is_empty())?;
        let email = self.email.filter(|email| !email.is_empty())?;
        Some((name, email))
    }
}
