//! API configuration and mock/remote mode selection.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Placeholder base URL shipped in development builds.
///
/// A configured URL equal to this value means "no real backend yet" and
/// keeps the app in mock mode.
pub const LOCAL_PLACEHOLDER: &str = "http://localhost:3000";

/// Which API implementation serves the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ApiMode {
    /// Seeded in-process implementation with durable local state
    Mock,
    /// HTTP implementation probing a real backend
    Remote,
}

/// Resolved API configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, if one is configured
    pub base_url: Option<String>,
}

impl ApiConfig {
    /// Creates a config with the given base URL.
    pub fn new(base_url: Option<String>) -> Self {
        Self { base_url }
    }

    /// Decides the API mode from the configured base URL.
    ///
    /// Remote mode requires a non-empty base URL that differs from the
    /// local placeholder; everything else resolves to mock mode. The
    /// comparison is exact string equality, matching how the placeholder
    /// is written into development configs.
    ///
    /// # Examples
    ///
    /// ```
    /// use glowbook_core::config::{ApiConfig, ApiMode};
    ///
    /// assert_eq!(ApiConfig::new(None).mode(), ApiMode::Mock);
    /// assert_eq!(
    ///     ApiConfig::new(Some("http://localhost:3000".into())).mode(),
    ///     ApiMode::Mock
    /// );
    /// assert_eq!(
    ///     ApiConfig::new(Some("https://api.glowbook.example".into())).mode(),
    ///     ApiMode::Remote
    /// );
    /// ```
    pub fn mode(&self) -> ApiMode {
        match self.base_url.as_deref() {
            Some(url) if !url.is_empty() && url != LOCAL_PLACEHOLDER => ApiMode::Remote,
            _ => ApiMode::Mock,
        }
    }

    /// True when `mode()` resolves to `ApiMode::Remote`.
    pub fn is_remote(&self) -> bool {
        self.mode() == ApiMode::Remote
    }
}
