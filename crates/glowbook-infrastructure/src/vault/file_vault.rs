//! File-backed session vault.
//!
//! One file per durable key under the vault directory: the token as a
//! raw string in `token.txt`, everything else as pretty-printed JSON written
//! through [`JsonFile`](crate::storage::JsonFile).

use crate::paths::GlowbookPaths;
use crate::storage::JsonFile;
use async_trait::async_trait;
use glowbook_core::booking::Booking;
use glowbook_core::user::{LocalAccount, User};
use glowbook_core::{Result, SessionVault};
use std::fs;
use std::path::PathBuf;

/// Durable session state on the local filesystem.
pub struct FileVault {
    token_path: PathBuf,
    user_file: JsonFile<User>,
    bookings_file: JsonFile<Vec<Booking>>,
    accounts_file: JsonFile<Vec<LocalAccount>>,
}

impl FileVault {
    /// Creates a vault rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on first
    /// write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            token_path: root.join("token.txt"),
            user_file: JsonFile::new(root.join("user.json")),
            bookings_file: JsonFile::new(root.join("bookings.json")),
            accounts_file: JsonFile::new(root.join("accounts.json")),
        }
    }

    /// Creates a vault at the platform-standard location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(GlowbookPaths::vault_dir()?))
    }
}

#[async_trait]
impl SessionVault for FileVault {
    async fn token(&self) -> Result<Option<String>> {
        if !self.token_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.token_path)?;
        let token = content.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    async fn set_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.token_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.token_path, token)?;
        Ok(())
    }

    async fn clear_token(&self) -> Result<()> {
        if self.token_path.exists() {
            fs::remove_file(&self.token_path)?;
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<Option<User>> {
        self.user_file.load()
    }

    async fn set_current_user(&self, user: &User) -> Result<()> {
        self.user_file.save(user)
    }

    async fn clear_current_user(&self) -> Result<()> {
        self.user_file.remove()
    }

    async fn bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings_file.load()?.unwrap_or_default())
    }

    async fn set_bookings(&self, bookings: &[Booking]) -> Result<()> {
        self.bookings_file.save(&bookings.to_vec())
    }

    async fn accounts(&self) -> Result<Vec<LocalAccount>> {
        Ok(self.accounts_file.load()?.unwrap_or_default())
    }

    async fn set_accounts(&self, accounts: &[LocalAccount]) -> Result<()> {
        self.accounts_file.save(&accounts.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowbook_core::booking::NewBooking;
    use tempfile::TempDir;

    fn vault(dir: &TempDir) -> FileVault {
        FileVault::new(dir.path())
    }

    #[tokio::test]
    async fn test_token_round_trip() {
        let dir = TempDir::new().unwrap();
        let v = vault(&dir);

        assert_eq!(v.token().await.unwrap(), None);

        v.set_token("mock-token-abc").await.unwrap();
        assert_eq!(v.token().await.unwrap(), Some("mock-token-abc".to_string()));

        v.clear_token().await.unwrap();
        assert_eq!(v.token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let dir = TempDir::new().unwrap();
        let v = vault(&dir);

        assert_eq!(v.current_user().await.unwrap(), None);

        let user = User::new("Asha", "9876543210");
        v.set_current_user(&user).await.unwrap();
        assert_eq!(v.current_user().await.unwrap(), Some(user));

        v.clear_current_user().await.unwrap();
        assert_eq!(v.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_state_survives_reopening() {
        let dir = TempDir::new().unwrap();

        let user = User::new("Asha", "9876543210");
        let booking = Booking::pending(NewBooking {
            service_ids: vec!["s1".to_string()],
            user_id: user.id.clone(),
            start_time: "2026-09-01T11:00:00".to_string(),
        });

        {
            let v = vault(&dir);
            v.set_token("mock-token-abc").await.unwrap();
            v.set_current_user(&user).await.unwrap();
            v.set_bookings(std::slice::from_ref(&booking)).await.unwrap();
        }

        // A fresh instance over the same directory sees the same state.
        let v = vault(&dir);
        assert_eq!(v.token().await.unwrap(), Some("mock-token-abc".to_string()));
        assert_eq!(v.current_user().await.unwrap(), Some(user));
        assert_eq!(v.bookings().await.unwrap(), vec![booking]);
    }

    #[tokio::test]
    async fn test_clear_session_keeps_bookings_and_accounts() {
        let dir = TempDir::new().unwrap();
        let v = vault(&dir);

        let user = User::new("Asha", "9876543210");
        v.set_token("mock-token-abc").await.unwrap();
        v.set_current_user(&user).await.unwrap();
        v.set_accounts(&[LocalAccount {
            user: user.clone(),
            pin: "1234".to_string(),
        }])
        .await
        .unwrap();

        v.clear_session().await.unwrap();

        assert_eq!(v.token().await.unwrap(), None);
        assert_eq!(v.current_user().await.unwrap(), None);
        assert_eq!(v.accounts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_lists_read_as_empty() {
        let dir = TempDir::new().unwrap();
        let v = vault(&dir);

        assert!(v.bookings().await.unwrap().is_empty());
        assert!(v.accounts().await.unwrap().is_empty());
    }
}
