//! Unified path management for Glowbook state on disk.
//!
//! All durable client state lives under platform-standard directories so
//! behavior is consistent across Linux, macOS, and Windows.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/glowbook/          # Config directory
//! └── config.toml              # API configuration ([api] base_url)
//!
//! ~/.local/share/glowbook/     # Data directory
//! └── vault/                   # Durable session state (FileVault)
//!     ├── token.txt
//!     ├── user.json
//!     ├── bookings.json
//!     └── accounts.json
//! ```

use glowbook_core::{GlowbookError, Result};
use std::path::PathBuf;

/// Unified path resolution for Glowbook.
pub struct GlowbookPaths;

impl GlowbookPaths {
    /// Returns the Glowbook configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/glowbook/`)
    /// - `Err(_)`: Could not determine the platform config directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("glowbook"))
            .ok_or_else(|| GlowbookError::config("Cannot find config directory"))
    }

    /// Returns the Glowbook data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/glowbook/`)
    /// - `Err(_)`: Could not determine the platform data directory
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("glowbook"))
            .ok_or_else(|| GlowbookError::config("Cannot find data directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the session vault directory.
    pub fn vault_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("vault"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_under_config_dir() {
        let config_file = GlowbookPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));

        let config_dir = GlowbookPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
        assert!(config_dir.ends_with("glowbook"));
    }

    #[test]
    fn test_vault_dir_lives_under_data_dir() {
        let vault_dir = GlowbookPaths::vault_dir().unwrap();
        assert!(vault_dir.ends_with("vault"));

        let data_dir = GlowbookPaths::data_dir().unwrap();
        assert!(vault_dir.starts_with(&data_dir));
    }
}
