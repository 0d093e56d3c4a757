//! In-memory session vault.
//!
//! Backs tests and fresh-state scenarios where nothing should touch the
//! filesystem. Same contract as the file vault, minus durability.

use async_trait::async_trait;
use glowbook_core::booking::Booking;
use glowbook_core::user::{LocalAccount, User};
use glowbook_core::{Result, SessionVault};
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct VaultState {
    token: Option<String>,
    user: Option<User>,
    bookings: Vec<Booking>,
    accounts: Vec<LocalAccount>,
}

/// Volatile session state behind a single async lock.
#[derive(Debug, Default)]
pub struct MemoryVault {
    state: Mutex<VaultState>,
}

impl MemoryVault {
    /// Creates an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vault that already holds a token and user, simulating a
    /// previously signed-in device.
    pub fn with_session(token: impl Into<String>, user: User) -> Self {
        Self {
            state: Mutex::new(VaultState {
                token: Some(token.into()),
                user: Some(user),
                ..VaultState::default()
            }),
        }
    }
}

#[async_trait]
impl SessionVault for MemoryVault {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.state.lock().await.token.clone())
    }

    async fn set_token(&self, token: &str) -> Result<()> {
        self.state.lock().await.token = Some(token.to_string());
        Ok(())
    }

    async fn clear_token(&self) -> Result<()> {
        self.state.lock().await.token = None;
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>> {
        Ok(self.state.lock().await.user.clone())
    }

    async fn set_current_user(&self, user: &User) -> Result<()> {
        self.state.lock().await.user = Some(user.clone());
        Ok(())
    }

    async fn clear_current_user(&self) -> Result<()> {
        self.state.lock().await.user = None;
        Ok(())
    }

    async fn bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.state.lock().await.bookings.clone())
    }

    async fn set_bookings(&self, bookings: &[Booking]) -> Result<()> {
        self.state.lock().await.bookings = bookings.to_vec();
        Ok(())
    }

    async fn accounts(&self) -> Result<Vec<LocalAccount>> {
        Ok(self.state.lock().await.accounts.clone())
    }

    async fn set_accounts(&self, accounts: &[LocalAccount]) -> Result<()> {
        self.state.lock().await.accounts = accounts.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty() {
        let vault = MemoryVault::new();

        assert_eq!(vault.token().await.unwrap(), None);
        assert_eq!(vault.current_user().await.unwrap(), None);
        assert!(vault.bookings().await.unwrap().is_empty());
        assert!(vault.accounts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_session_drops_token_and_user() {
        let user = User::new("Asha", "9876543210");
        let vault = MemoryVault::new();
        vault.set_token("t").await.unwrap();
        vault.set_current_user(&user).await.unwrap();

        vault.clear_session().await.unwrap();

        assert_eq!(vault.token().await.unwrap(), None);
        assert_eq!(vault.current_user().await.unwrap(), None);
    }
}
