//! HTTP-backed storefront implementation.
//!
//! Every operation resolves its endpoint through the fallback resolver,
//! normalizes phone numbers before the wire, and decodes user payloads
//! into the canonical shape before anything is persisted.

use crate::endpoints;
use crate::http::{HttpClient, RequestOptions};
use crate::normalize::{decode_auth_payload, decode_user, identity_object};
use async_trait::async_trait;
use glowbook_core::booking::{Booking, NewBooking};
use glowbook_core::catalog::{Feedback, MediaItem, Offer, Service};
use glowbook_core::otp::{OtpRegistration, OtpRequested, OtpVerification};
use glowbook_core::user::{AuthPayload, User};
use glowbook_core::validate::normalize_phone;
use glowbook_core::{GlowbookError, Result, SessionVault, StorefrontApi};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::sync::Arc;

/// Remote `StorefrontApi` implementation.
pub struct RemoteApi {
    http: HttpClient,
    vault: Arc<dyn SessionVault>,
}

impl RemoteApi {
    /// Creates a remote backend against the given base URL.
    pub fn new(base_url: impl Into<String>, vault: Arc<dyn SessionVault>) -> Self {
        let http = HttpClient::new(base_url, Arc::clone(&vault));
        Self { http, vault }
    }

    /// Stores a successful auth result as the current session.
    async fn persist_session(&self, payload: &AuthPayload) -> Result<()> {
        self.vault.set_token(&payload.token).await?;
        self.vault.set_current_user(&payload.user).await
    }
}

/// Decodes a response body into a typed shape, surfacing mismatches as
/// decode errors rather than serialization noise.
fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| GlowbookError::decode(format!("unexpected {} response: {}", what, e)))
}

#[async_trait]
impl StorefrontApi for RemoteApi {
    async fn login(&self, mobile_number: &str, pin: &str) -> Result<AuthPayload> {
        let body = json!({
            "phone": normalize_phone(mobile_number),
            "pin": pin,
        });
        let value = self
            .http
            .request_first_ok(endpoints::LOGIN, RequestOptions::new().with_json(body))
            .await?;

        let payload = decode_auth_payload(&value)?;
        self.persist_session(&payload).await?;
        Ok(payload)
    }

    async fn register(&self, name: &str, mobile_number: &str, pin: &str) -> Result<AuthPayload> {
        let body = json!({
            "name": name,
            "phone": normalize_phone(mobile_number),
            "pin": pin,
        });
        let value = self
            .http
            .request_first_ok(endpoints::REGISTER, RequestOptions::new().with_json(body))
            .await?;

        let payload = decode_auth_payload(&value)?;
        self.persist_session(&payload).await?;
        Ok(payload)
    }

    async fn request_otp(&self, mobile_number: &str) -> Result<OtpRequested> {
        let body = json!({ "phone": normalize_phone(mobile_number) });
        let value = self
            .http
            .request_first_ok(endpoints::SEND_OTP, RequestOptions::new().with_json(body))
            .await?;

        if value.is_null() {
            return Ok(OtpRequested {
                expires_in: None,
                otp_token: None,
                message: None,
            });
        }
        decode(value, "send-otp")
    }

    async fn verify_otp(&self, mobile_number: &str, code: &str) -> Result<OtpVerification> {
        let body = json!({
            "phone": normalize_phone(mobile_number),
            "code": code,
        });
        let value = self
            .http
            .request_first_ok(endpoints::VERIFY_OTP, RequestOptions::new().with_json(body))
            .await?;

        decode(value, "verify-otp")
    }

    async fn register_with_otp(&self, registration: OtpRegistration) -> Result<AuthPayload> {
        let mut body = json!({
            "name": registration.name,
            "phone": normalize_phone(&registration.mobile_number),
            "pin": registration.pin,
            "otp": registration.code,
        });
        if let Some(token) = &registration.otp_token {
            body["otpToken"] = Value::String(token.clone());
        }

        let value = self
            .http
            .request_first_ok(endpoints::REGISTER, RequestOptions::new().with_json(body))
            .await?;

        let payload = decode_auth_payload(&value)?;
        self.persist_session(&payload).await?;
        Ok(payload)
    }

    async fn me(&self) -> Result<Option<User>> {
        // No stored token means no session; skip the guaranteed 401.
        if self.vault.token().await?.is_none() {
            return Ok(None);
        }

        let result = self
            .http
            .request_first_ok(endpoints::ME, RequestOptions::new().with_auth())
            .await;

        match result {
            Ok(value) => Ok(Some(decode_user(identity_object(&value))?)),
            Err(err) if err.is_unauthorized() => {
                // The backend rejected our token: the session is gone,
                // not the request.
                tracing::info!("stored session rejected, clearing local state");
                self.vault.clear_session().await?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn logout(&self) -> Result<()> {
        // Best-effort server call; local sign-out must not depend on it.
        let result = self
            .http
            .request_first_ok(
                endpoints::LOGOUT,
                RequestOptions::new()
                    .with_method(Method::POST)
                    .with_auth(),
            )
            .await;
        if let Err(err) = result {
            tracing::debug!(error = %err, "server logout failed, clearing local session anyway");
        }

        self.vault.clear_session().await
    }

    async fn update_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<User> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("avatar", part);

        let value = self
            .http
            .request_json(
                endpoints::AVATAR,
                RequestOptions::new()
                    .with_method(Method::POST)
                    .with_multipart(form)
                    .with_auth(),
            )
            .await?;

        let user = decode_user(identity_object(&value))?;
        self.vault.set_current_user(&user).await?;
        Ok(user)
    }

    async fn fetch_services(&self) -> Result<Vec<Service>> {
        let value = self
            .http
            .request_first_ok(endpoints::SERVICES, RequestOptions::new())
            .await?;
        decode(value, "services")
    }

    async fn fetch_service(&self, id: &str) -> Result<Service> {
        let paths = endpoints::service_paths(id);
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();

        let value = self.http.request_first_ok(&refs, RequestOptions::new()).await?;
        decode(value, "service")
    }

    async fn fetch_offers(&self) -> Result<Vec<Offer>> {
        let value = self
            .http
            .request_first_ok(endpoints::OFFERS, RequestOptions::new())
            .await?;
        decode(value, "offers")
    }

    async fn fetch_previous_work(&self) -> Result<Vec<MediaItem>> {
        let value = self
            .http
            .request_first_ok(endpoints::PREVIOUS_WORK, RequestOptions::new())
            .await?;
        decode(value, "previous-work")
    }

    async fn fetch_feedbacks(&self) -> Result<Vec<Feedback>> {
        let value = self
            .http
            .request_first_ok(endpoints::FEEDBACKS, RequestOptions::new())
            .await?;
        decode(value, "feedbacks")
    }

    async fn create_booking(&self, request: NewBooking) -> Result<Booking> {
        let body = serde_json::to_value(&request)?;
        let value = self
            .http
            .request_first_ok(
                endpoints::BOOKINGS,
                RequestOptions::new().with_json(body).with_auth(),
            )
            .await?;
        decode(value, "booking")
    }

    async fn list_bookings(&self, user_id: &str) -> Result<Vec<Booking>> {
        let paths = endpoints::booking_list_paths(user_id);
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();

        let value = self
            .http
            .request_first_ok(&refs, RequestOptions::new().with_auth())
            .await?;
        decode(value, "bookings")
    }
}
