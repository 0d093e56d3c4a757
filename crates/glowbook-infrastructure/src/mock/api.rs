//! In-process storefront backend with simulated latency.
//!
//! Serves the seeded catalog, validates registrations, and keeps durable
//! state (accounts, session, bookings) in the session vault so it
//! survives restarts like a real backend would. OTP challenges are owned
//! by the instance; constructing a fresh `MockApi` always starts with a
//! clean challenge table.

use crate::mock::seed;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use glowbook_core::booking::{Booking, NewBooking};
use glowbook_core::catalog::{Feedback, MediaItem, Offer, Service};
use glowbook_core::otp::{OtpRegistration, OtpRequested, OtpVerification};
use glowbook_core::user::{AuthPayload, LocalAccount, User};
use glowbook_core::validate::{is_valid_mobile, is_valid_pin};
use glowbook_core::{GlowbookError, Result, SessionVault, StorefrontApi};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// The fixed code every mock OTP challenge expects.
pub const OTP_CODE: &str = "482916";

/// A live OTP challenge for one mobile number.
#[derive(Debug, Clone)]
struct OtpChallenge {
    code: String,
    expires_at: DateTime<Utc>,
    /// Token handed out by a successful verification; registration must
    /// present it back (when it presents one at all)
    issued_token: Option<String>,
}

impl OtpChallenge {
    fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Mock `StorefrontApi` implementation.
pub struct MockApi {
    vault: Arc<dyn SessionVault>,
    challenges: Mutex<HashMap<String, OtpChallenge>>,
    otp_ttl: Duration,
    latency: bool,
}

impl MockApi {
    /// Creates a mock backend over the given vault.
    pub fn new(vault: Arc<dyn SessionVault>) -> Self {
        Self {
            vault,
            challenges: Mutex::new(HashMap::new()),
            otp_ttl: Duration::minutes(2),
            latency: true,
        }
    }

    /// Overrides the OTP validity window. Tests use a zero window to
    /// exercise expiry without waiting.
    pub fn with_otp_ttl(mut self, ttl: Duration) -> Self {
        self.otp_ttl = ttl;
        self
    }

    /// Disables the simulated latency.
    pub fn without_latency(mut self) -> Self {
        self.latency = false;
        self
    }

    async fn pause(&self, ms: u64) {
        if self.latency {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        }
    }

    /// Demo account merged with locally registered ones.
    async fn all_accounts(&self) -> Result<Vec<LocalAccount>> {
        let mut accounts = vec![seed::demo_account()];
        accounts.extend(self.vault.accounts().await?);
        Ok(accounts)
    }

    /// Mints a session token and persists token + user to the vault.
    async fn persist_session(&self, user: User) -> Result<AuthPayload> {
        let token = format!("mock-token-{}", Uuid::new_v4());
        self.vault.set_token(&token).await?;
        self.vault.set_current_user(&user).await?;
        Ok(AuthPayload { token, user })
    }

    /// Shared registration path for PIN-only and OTP-backed sign-up.
    async fn register_account(
        &self,
        name: &str,
        mobile_number: &str,
        pin: &str,
    ) -> Result<AuthPayload> {
        if !is_valid_mobile(mobile_number) {
            return Err(GlowbookError::validation("Invalid mobile number"));
        }
        if !is_valid_pin(pin) {
            return Err(GlowbookError::validation("Invalid PIN"));
        }

        let accounts = self.all_accounts().await?;
        if accounts
            .iter()
            .any(|account| account.user.mobile_number == mobile_number)
        {
            return Err(GlowbookError::validation("Mobile number already registered"));
        }

        let user = User::new(name, mobile_number);
        let mut stored = self.vault.accounts().await?;
        stored.push(LocalAccount {
            user: user.clone(),
            pin: pin.to_string(),
        });
        self.vault.set_accounts(&stored).await?;

        tracing::info!(mobile = %mobile_number, "mock account registered");
        self.persist_session(user).await
    }
}

#[async_trait]
impl StorefrontApi for MockApi {
    async fn login(&self, mobile_number: &str, pin: &str) -> Result<AuthPayload> {
        self.pause(400).await;

        let accounts = self.all_accounts().await?;
        let account = accounts
            .iter()
            .find(|account| account.user.mobile_number == mobile_number && account.pin == pin);

        match account {
            Some(account) => self.persist_session(account.user.clone()).await,
            None => Err(GlowbookError::validation("Invalid credentials")),
        }
    }

    async fn register(&self, name: &str, mobile_number: &str, pin: &str) -> Result<AuthPayload> {
        self.pause(400).await;
        self.register_account(name, mobile_number, pin).await
    }

    async fn request_otp(&self, mobile_number: &str) -> Result<OtpRequested> {
        self.pause(300).await;

        let challenge = OtpChallenge {
            code: OTP_CODE.to_string(),
            expires_at: Utc::now() + self.otp_ttl,
            issued_token: None,
        };

        // A new request replaces any prior challenge for this number.
        self.challenges
            .lock()
            .await
            .insert(mobile_number.to_string(), challenge);

        tracing::debug!(mobile = %mobile_number, "otp challenge issued");
        Ok(OtpRequested {
            expires_in: Some(self.otp_ttl.num_seconds().max(0) as u64),
            otp_token: None,
            message: Some("OTP sent".to_string()),
        })
    }

    async fn verify_otp(&self, mobile_number: &str, code: &str) -> Result<OtpVerification> {
        self.pause(300).await;

        let mut challenges = self.challenges.lock().await;
        let challenge = challenges
            .get_mut(mobile_number)
            .ok_or_else(|| GlowbookError::validation("No OTP requested for this number"))?;

        if challenge.is_expired() {
            return Ok(OtpVerification {
                verified: false,
                otp_token: None,
                message: Some("OTP expired".to_string()),
            });
        }

        if challenge.code != code {
            return Ok(OtpVerification {
                verified: false,
                otp_token: None,
                message: Some("Invalid OTP".to_string()),
            });
        }

        // Re-verification rotates the token; only the latest one counts.
        let token = Uuid::new_v4().to_string();
        challenge.issued_token = Some(token.clone());

        Ok(OtpVerification {
            verified: true,
            otp_token: Some(token),
            message: None,
        })
    }

    async fn register_with_otp(&self, registration: OtpRegistration) -> Result<AuthPayload> {
        self.pause(400).await;

        {
            let mut challenges = self.challenges.lock().await;
            let challenge = challenges
                .get(&registration.mobile_number)
                .cloned()
                .ok_or_else(|| GlowbookError::validation("OTP verification required"))?;

            if challenge.is_expired() {
                challenges.remove(&registration.mobile_number);
                return Err(GlowbookError::validation("OTP expired"));
            }
            if challenge.code != registration.code {
                return Err(GlowbookError::validation("Invalid OTP"));
            }
            if registration.otp_token.is_some() && registration.otp_token != challenge.issued_token
            {
                return Err(GlowbookError::validation("OTP token mismatch"));
            }
        }

        let payload = self
            .register_account(
                &registration.name,
                &registration.mobile_number,
                &registration.pin,
            )
            .await?;

        // Success consumes the challenge; the token is single-use.
        self.challenges
            .lock()
            .await
            .remove(&registration.mobile_number);

        Ok(payload)
    }

    async fn me(&self) -> Result<Option<User>> {
        self.pause(200).await;

        match self.vault.token().await? {
            Some(_) => self.vault.current_user().await,
            None => Ok(None),
        }
    }

    async fn logout(&self) -> Result<()> {
        self.pause(100).await;
        self.vault.clear_session().await
    }

    async fn update_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<User> {
        self.pause(300).await;

        let mut user = self
            .vault
            .current_user()
            .await?
            .ok_or_else(|| GlowbookError::validation("Not signed in"))?;

        tracing::debug!(size = bytes.len(), "storing avatar upload");
        user.avatar_url = Some(format!(
            "https://media.glowbook.example/avatars/{}-{}",
            Uuid::new_v4(),
            file_name
        ));

        let mut accounts = self.vault.accounts().await?;
        for account in &mut accounts {
            if account.user.mobile_number == user.mobile_number {
                account.user = user.clone();
            }
        }
        self.vault.set_accounts(&accounts).await?;
        self.vault.set_current_user(&user).await?;

        Ok(user)
    }

    async fn fetch_services(&self) -> Result<Vec<Service>> {
        self.pause(200).await;
        Ok(seed::services())
    }

    async fn fetch_service(&self, id: &str) -> Result<Service> {
        self.pause(200).await;

        seed::services()
            .into_iter()
            .find(|service| service.id == id)
            .ok_or_else(|| GlowbookError::not_found("service", id))
    }

    async fn fetch_offers(&self) -> Result<Vec<Offer>> {
        self.pause(200).await;
        Ok(seed::offers())
    }

    async fn fetch_previous_work(&self) -> Result<Vec<MediaItem>> {
        self.pause(200).await;
        Ok(seed::previous_work())
    }

    async fn fetch_feedbacks(&self) -> Result<Vec<Feedback>> {
        self.pause(200).await;
        Ok(seed::feedbacks())
    }

    async fn create_booking(&self, request: NewBooking) -> Result<Booking> {
        self.pause(300).await;

        let booking = Booking::pending(request);
        let mut bookings = self.vault.bookings().await?;
        bookings.push(booking.clone());
        self.vault.set_bookings(&bookings).await?;

        tracing::info!(booking = %booking.id, "mock booking created");
        Ok(booking)
    }

    async fn list_bookings(&self, user_id: &str) -> Result<Vec<Booking>> {
        self.pause(200).await;

        let bookings = self.vault.bookings().await?;
        Ok(bookings
            .into_iter()
            .filter(|booking| booking.user_id == user_id)
            .collect())
    }
}
