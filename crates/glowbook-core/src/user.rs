//! User identity types.
//!
//! `User` is the canonical, normalized shape. Remote backends disagree on
//! field naming (`fullName` vs `name`, `mobileNumber` vs `mobile_number`);
//! the client layer resolves those variants before a `User` is built, so
//! everything past the wire boundary works with one shape.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed-in (or registered) customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// International-format mobile number used as the login identifier
    pub mobile_number: String,
    /// Profile image URL, if one has been uploaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// ISO 8601 registration timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_registered: Option<String>,
}

impl User {
    /// Creates a fresh user with a generated id and the current timestamp.
    pub fn new(name: impl Into<String>, mobile_number: impl Into<String>) -> Self {
        Self {
            id: format!("u-{}", Uuid::new_v4()),
            name: name.into(),
            mobile_number: mobile_number.into(),
            avatar_url: None,
            date_registered: Some(Utc::now().to_rfc3339()),
        }
    }
}

/// A locally registered account in mock mode.
///
/// The PIN lives here, next to the user record, and never on `User`
/// itself, so user values can be handed around and persisted without
/// leaking credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalAccount {
    pub user: User,
    pub pin: String,
}

/// Token plus user returned by every successful authentication call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_unique_id() {
        let a = User::new("Asha", "9876543210");
        let b = User::new("Asha", "9876543210");

        assert!(a.id.starts_with("u-"));
        assert_ne!(a.id, b.id);
        assert!(a.date_registered.is_some());
    }

    #[test]
    fn test_user_serializes_snake_case() {
        let user = User::new("Asha", "9876543210");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["mobile_number"], "9876543210");
        assert!(json.get("avatar_url").is_none());
    }
}
