//! Composition root for the storefront.
//!
//! Wires configuration, the session vault, the API facade, and the
//! in-memory stores into a single [`AppContext`]. The mock/remote
//! decision is made exactly once here; everything downstream talks to
//! `Arc<dyn StorefrontApi>` and never learns which side it got.

use crate::auth::AuthSession;
use crate::selection::BookingSelection;
use glowbook_client::RemoteApi;
use glowbook_core::config::{ApiConfig, ApiMode};
use glowbook_core::{Result, SessionVault, StorefrontApi};
use glowbook_infrastructure::settings::load_api_config;
use glowbook_infrastructure::{FileVault, MockApi};
use std::sync::Arc;

/// Builds the API facade matching the configured mode.
///
/// Remote mode is chosen only when the config carries a usable base
/// URL; everything else falls back to the seeded in-process mock so
/// the app works offline and in development without a backend.
pub fn build_api(config: &ApiConfig, vault: Arc<dyn SessionVault>) -> Arc<dyn StorefrontApi> {
    match config.mode() {
        ApiMode::Remote => {
            // Safe to unwrap because mode() yields Remote only for a present base URL.
            let base_url = config.base_url.clone().unwrap();
            tracing::info!(mode = %ApiMode::Remote, base_url = %base_url, "API facade selected");
            Arc::new(RemoteApi::new(base_url, vault))
        }
        ApiMode::Mock => {
            tracing::info!(mode = %ApiMode::Mock, "API facade selected");
            Arc::new(MockApi::new(vault))
        }
    }
}

/// Everything a frontend needs, assembled once at startup.
pub struct AppContext {
    /// Facade for all storefront operations, mock or remote.
    pub api: Arc<dyn StorefrontApi>,
    /// Persistent session storage shared with the facade.
    pub vault: Arc<dyn SessionVault>,
    /// In-memory authentication state.
    pub auth: Arc<AuthSession>,
    /// In-memory service selection for the booking flow.
    pub selection: Arc<BookingSelection>,
}

impl AppContext {
    /// Assembles a context from explicit parts.
    pub fn new(config: &ApiConfig, vault: Arc<dyn SessionVault>) -> Self {
        let api = build_api(config, Arc::clone(&vault));
        let auth = Arc::new(AuthSession::new(Arc::clone(&api), Arc::clone(&vault)));
        Self {
            api,
            vault,
            auth,
            selection: Arc::new(BookingSelection::new()),
        }
    }

    /// Assembles the default context: config from disk and environment,
    /// sessions persisted under the platform data directory.
    pub fn init() -> Result<Self> {
        let config = load_api_config()?;
        let vault: Arc<dyn SessionVault> = Arc::new(FileVault::open_default()?);
        Ok(Self::new(&config, vault))
    }
}
