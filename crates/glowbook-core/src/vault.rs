//! Session vault trait.
//!
//! Defines the interface for durable client-side state: the auth token,
//! the signed-in user, locally created bookings, and locally registered
//! accounts (mock mode).

use crate::booking::Booking;
use crate::error::Result;
use crate::user::{LocalAccount, User};
use async_trait::async_trait;

/// An abstract store for durable session state.
///
/// This trait decouples the API implementations from the storage
/// mechanism (JSON files on disk, in-memory maps in tests). Callers
/// follow a single-writer discipline: mutating operations are invoked one
/// at a time, so implementations only need to protect against concurrent
/// processes, not in-process races.
#[async_trait]
pub trait SessionVault: Send + Sync {
    /// Reads the stored auth token.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))`: A session token is stored
    /// - `Ok(None)`: No token stored
    /// - `Err(_)`: Storage failure
    async fn token(&self) -> Result<Option<String>>;

    /// Stores the auth token, replacing any previous one.
    async fn set_token(&self, token: &str) -> Result<()>;

    /// Removes the stored auth token, if any.
    async fn clear_token(&self) -> Result<()>;

    /// Reads the stored signed-in user.
    async fn current_user(&self) -> Result<Option<User>>;

    /// Stores the signed-in user, replacing any previous one.
    async fn set_current_user(&self, user: &User) -> Result<()>;

    /// Removes the stored user, if any.
    async fn clear_current_user(&self) -> Result<()>;

    /// Reads all locally stored bookings.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Booking>)`: Stored bookings, empty when none exist yet
    /// - `Err(_)`: Storage failure
    async fn bookings(&self) -> Result<Vec<Booking>>;

    /// Replaces the stored booking list.
    async fn set_bookings(&self, bookings: &[Booking]) -> Result<()>;

    /// Reads all locally registered accounts.
    async fn accounts(&self) -> Result<Vec<LocalAccount>>;

    /// Replaces the stored account list.
    async fn set_accounts(&self, accounts: &[LocalAccount]) -> Result<()>;

    /// Clears token and user together.
    ///
    /// Bookings and accounts survive sign-out; only the session identity
    /// is dropped.
    async fn clear_session(&self) -> Result<()> {
        self.clear_token().await?;
        self.clear_current_user().await
    }
}
