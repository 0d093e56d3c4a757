//! Auth session store.
//!
//! Owns the in-memory user/token pair and orchestrates the sign-in,
//! OTP sign-up, and sign-out flows against the storefront facade. The
//! vault remains the durable source of truth; this store is what the UI
//! layer reads synchronously between launches of those flows.

use glowbook_core::otp::{OtpRegistration, OtpRequested, OtpVerification};
use glowbook_core::user::User;
use glowbook_core::{Result, SessionVault, StorefrontApi};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone)]
struct SessionState {
    user: Option<User>,
    token: Option<String>,
}

/// Client-side session state machine: anonymous or authenticated.
///
/// Sign-in and sign-up failures leave the state untouched and re-raise
/// for the caller to display; only success transitions to authenticated.
pub struct AuthSession {
    api: Arc<dyn StorefrontApi>,
    vault: Arc<dyn SessionVault>,
    state: RwLock<SessionState>,
}

impl AuthSession {
    /// Creates an anonymous session over the given facade and vault.
    pub fn new(api: Arc<dyn StorefrontApi>, vault: Arc<dyn SessionVault>) -> Self {
        Self {
            api,
            vault,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Restores a persisted session at launch.
    ///
    /// Loads token and user from the vault and, when both are present,
    /// transitions to authenticated without re-validating against the
    /// network. Staleness is detected lazily by the next authenticated
    /// call instead of blocking startup.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: A session was restored
    /// - `Ok(false)`: Nothing usable was persisted
    /// - `Err(_)`: Vault failure
    pub async fn hydrate(&self) -> Result<bool> {
        let token = self.vault.token().await?;
        let user = self.vault.current_user().await?;

        match (token, user) {
            (Some(token), Some(user)) => {
                tracing::info!(user = %user.id, "session restored from vault");
                let mut state = self.state.write().await;
                state.token = Some(token);
                state.user = Some(user);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Signs in with mobile number and PIN.
    pub async fn sign_in(&self, mobile_number: &str, pin: &str) -> Result<User> {
        let payload = self.api.login(mobile_number, pin).await?;

        let mut state = self.state.write().await;
        state.token = Some(payload.token);
        state.user = Some(payload.user.clone());
        tracing::info!(user = %payload.user.id, "signed in");

        Ok(payload.user)
    }

    /// Registers a new customer directly and signs them in.
    pub async fn register(&self, name: &str, mobile_number: &str, pin: &str) -> Result<User> {
        let payload = self.api.register(name, mobile_number, pin).await?;

        let mut state = self.state.write().await;
        state.token = Some(payload.token);
        state.user = Some(payload.user.clone());
        tracing::info!(user = %payload.user.id, "registered");

        Ok(payload.user)
    }

    /// Requests an OTP for the given number. No state transition.
    pub async fn request_otp(&self, mobile_number: &str) -> Result<OtpRequested> {
        self.api.request_otp(mobile_number).await
    }

    /// Verifies an OTP code. No state transition; the returned evidence
    /// feeds `sign_up`.
    pub async fn verify_otp(&self, mobile_number: &str, code: &str) -> Result<OtpVerification> {
        self.api.verify_otp(mobile_number, code).await
    }

    /// Completes an OTP-backed registration and signs the new user in.
    pub async fn sign_up(&self, registration: OtpRegistration) -> Result<User> {
        let payload = self.api.register_with_otp(registration).await?;

        let mut state = self.state.write().await;
        state.token = Some(payload.token);
        state.user = Some(payload.user.clone());
        tracing::info!(user = %payload.user.id, "signed up");

        Ok(payload.user)
    }

    /// Signs out.
    ///
    /// In-memory state clears first and unconditionally, so the device
    /// is signed out even if clearing durable state fails; such a
    /// failure still surfaces to the caller.
    pub async fn sign_out(&self) -> Result<()> {
        {
            let mut state = self.state.write().await;
            *state = SessionState::default();
        }
        self.api.logout().await
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// The session token, if any.
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    /// True when both user and token are held.
    pub async fn is_authenticated(&self) -> bool {
        let state = self.state.read().await;
        state.user.is_some() && state.token.is_some()
    }
}
