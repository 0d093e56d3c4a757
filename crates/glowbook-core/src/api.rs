//! The storefront API facade trait.
//!
//! Defines the interface every API implementation (mock or remote) must
//! provide. Consumers hold an `Arc<dyn StorefrontApi>` and never know
//! which mode they are talking to.

use crate::booking::{Booking, NewBooking};
use crate::catalog::{Feedback, MediaItem, Offer, Service};
use crate::error::Result;
use crate::otp::{OtpRegistration, OtpRequested, OtpVerification};
use crate::user::{AuthPayload, User};
use async_trait::async_trait;

/// An abstract storefront backend.
///
/// This trait defines the contract between the application stores and the
/// backend, decoupling auth/booking flows from the transport (in-process
/// mock with seeded data, or HTTP against a real server).
///
/// # Implementation Notes
///
/// Implementations are responsible for:
/// - Persisting token and user to the session vault on successful auth
/// - Owning any transient flow state (e.g. live OTP challenges)
/// - Mapping their failure modes into `GlowbookError`
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Authenticates with mobile number and PIN.
    ///
    /// # Returns
    ///
    /// - `Ok(AuthPayload)`: Credentials accepted; token and user are
    ///   already persisted to the vault
    /// - `Err(_)`: Invalid credentials or transport failure
    async fn login(&self, mobile_number: &str, pin: &str) -> Result<AuthPayload>;

    /// Registers a new account and signs it in.
    ///
    /// # Returns
    ///
    /// - `Ok(AuthPayload)`: Account created, session persisted
    /// - `Err(_)`: Validation failure (bad mobile/PIN, duplicate number)
    ///   or transport failure
    async fn register(&self, name: &str, mobile_number: &str, pin: &str) -> Result<AuthPayload>;

    /// Sends a one-time code to the given mobile number.
    async fn request_otp(&self, mobile_number: &str) -> Result<OtpRequested>;

    /// Checks a one-time code against the live challenge.
    ///
    /// # Returns
    ///
    /// - `Ok(OtpVerification { verified: true, .. })`: Code accepted; the
    ///   payload carries a single-use token for registration
    /// - `Ok(OtpVerification { verified: false, .. })`: Wrong or expired
    ///   code, with a message explaining which
    /// - `Err(_)`: No challenge outstanding or transport failure
    async fn verify_otp(&self, mobile_number: &str, code: &str) -> Result<OtpVerification>;

    /// Completes an OTP-backed registration, consuming the challenge.
    async fn register_with_otp(&self, registration: OtpRegistration) -> Result<AuthPayload>;

    /// Resolves the currently signed-in user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: A valid session exists
    /// - `Ok(None)`: No session, or the stored session was rejected by
    ///   the backend (in which case local state has been cleared)
    /// - `Err(_)`: Transport failure other than a 401/403 rejection
    async fn me(&self) -> Result<Option<User>>;

    /// Signs out, clearing the persisted session.
    ///
    /// Remote implementations treat the server call as best-effort: the
    /// local session is cleared even when the server is unreachable.
    async fn logout(&self) -> Result<()>;

    /// Uploads a new profile image and returns the updated user.
    async fn update_avatar(&self, file_name: &str, bytes: Vec<u8>) -> Result<User>;

    /// Fetches the full service catalog.
    async fn fetch_services(&self) -> Result<Vec<Service>>;

    /// Fetches one service by id.
    async fn fetch_service(&self, id: &str) -> Result<Service>;

    /// Fetches current promotional offers.
    async fn fetch_offers(&self) -> Result<Vec<Offer>>;

    /// Fetches the previous-work gallery.
    async fn fetch_previous_work(&self) -> Result<Vec<MediaItem>>;

    /// Fetches customer feedback entries.
    async fn fetch_feedbacks(&self) -> Result<Vec<Feedback>>;

    /// Creates a booking. New bookings always start out `pending`.
    async fn create_booking(&self, request: NewBooking) -> Result<Booking>;

    /// Lists bookings belonging to the given user.
    async fn list_bookings(&self, user_id: &str) -> Result<Vec<Booking>>;
}
