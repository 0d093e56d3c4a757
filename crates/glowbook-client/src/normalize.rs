//! Wire-payload normalization.
//!
//! Backends disagree on user field naming: `fullName` vs `name`,
//! `mobileNumber` vs `mobile_number`, string vs numeric ids, wrapped vs
//! flat auth payloads. Everything funnels through here so the rest of
//! the client only ever sees the canonical `User` shape. Missing
//! required fields are an explicit decode error, never a silently empty
//! user.

use glowbook_core::user::{AuthPayload, User};
use glowbook_core::{GlowbookError, Result};
use serde_json::Value;

/// Decodes a user object, reconciling field-name variants.
///
/// Precedence: `fullName` over `name`, `mobileNumber` over
/// `mobile_number`. A null or non-string variant counts as absent, so
/// `{"fullName": null, "name": "…"}` resolves through `name`. A payload
/// offering no usable variant of a required field is rejected.
pub fn decode_user(value: &Value) -> Result<User> {
    let id = match value.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => return Err(GlowbookError::decode("user payload is missing an id")),
    };

    let name = first_string(value, &["fullName", "name"])
        .ok_or_else(|| GlowbookError::decode("user payload has neither fullName nor name"))?;

    let mobile_number = first_string(value, &["mobileNumber", "mobile_number"]).ok_or_else(
        || GlowbookError::decode("user payload has neither mobileNumber nor mobile_number"),
    )?;

    Ok(User {
        id,
        name,
        mobile_number,
        avatar_url: first_string(value, &["avatarUrl", "avatar_url"]),
        date_registered: first_string(value, &["dateRegistered", "date_registered"]),
    })
}

/// Decodes a `{token, user}` auth response.
///
/// The user may arrive wrapped under `user` or flattened into the top
/// level next to the token.
pub fn decode_auth_payload(value: &Value) -> Result<AuthPayload> {
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| GlowbookError::decode("auth response is missing a token"))?
        .to_string();

    let user = decode_user(value.get("user").unwrap_or(value))?;

    Ok(AuthPayload { token, user })
}

/// Extracts the user object from an identity-check response, which some
/// backends wrap under `user`.
pub fn identity_object(value: &Value) -> &Value {
    value.get("user").unwrap_or(value)
}

fn first_string(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_case_variants_win() {
        let user = decode_user(&json!({
            "id": "u1",
            "fullName": "Asha Rao",
            "name": "ignored",
            "mobileNumber": "+919876543210",
            "mobile_number": "ignored",
        }))
        .unwrap();

        assert_eq!(user.name, "Asha Rao");
        assert_eq!(user.mobile_number, "+919876543210");
    }

    #[test]
    fn test_snake_case_only_payload_decodes() {
        let user = decode_user(&json!({
            "id": "u1",
            "name": "Asha",
            "mobile_number": "9876543210",
            "avatar_url": "https://cdn.example/a.jpg",
        }))
        .unwrap();

        assert_eq!(user.name, "Asha");
        assert_eq!(user.avatar_url.as_deref(), Some("https://cdn.example/a.jpg"));
    }

    #[test]
    fn test_null_variants_fall_through() {
        let user = decode_user(&json!({
            "id": "u1",
            "fullName": null,
            "name": "Asha",
            "mobileNumber": null,
            "mobile_number": "9876543210",
        }))
        .unwrap();

        assert_eq!(user.name, "Asha");
        assert_eq!(user.mobile_number, "9876543210");

        let err = decode_user(&json!({
            "id": "u1",
            "fullName": null,
            "name": null,
            "mobileNumber": "9876543210",
        }))
        .unwrap_err();
        assert!(matches!(err, GlowbookError::Decode(_)));
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let user = decode_user(&json!({
            "id": 42,
            "name": "Asha",
            "mobileNumber": "9876543210",
        }))
        .unwrap();

        assert_eq!(user.id, "42");
    }

    #[test]
    fn test_missing_name_is_a_decode_error() {
        let err = decode_user(&json!({
            "id": "u1",
            "mobile_number": "9876543210",
        }))
        .unwrap_err();

        assert!(matches!(err, GlowbookError::Decode(_)));
    }

    #[test]
    fn test_missing_mobile_is_a_decode_error() {
        let err = decode_user(&json!({
            "id": "u1",
            "fullName": "Asha",
        }))
        .unwrap_err();

        assert!(matches!(err, GlowbookError::Decode(_)));
    }

    #[test]
    fn test_auth_payload_wrapped_or_flat() {
        let wrapped = decode_auth_payload(&json!({
            "token": "t1",
            "user": {"id": "u1", "name": "Asha", "mobileNumber": "9876543210"},
        }))
        .unwrap();
        assert_eq!(wrapped.token, "t1");
        assert_eq!(wrapped.user.id, "u1");

        let flat = decode_auth_payload(&json!({
            "token": "t2",
            "id": "u2",
            "fullName": "Asha",
            "mobile_number": "9876543210",
        }))
        .unwrap();
        assert_eq!(flat.token, "t2");
        assert_eq!(flat.user.id, "u2");
    }

    #[test]
    fn test_missing_token_is_a_decode_error() {
        let err = decode_auth_payload(&json!({
            "user": {"id": "u1", "name": "Asha", "mobileNumber": "9876543210"},
        }))
        .unwrap_err();

        assert!(matches!(err, GlowbookError::Decode(_)));
    }
}
