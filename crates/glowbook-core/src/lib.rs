//! Domain core for the Glowbook storefront client.
//!
//! Holds the data model, the error type, the two trait seams every other
//! crate plugs into (`StorefrontApi`, `SessionVault`), and the validation
//! rules shared by mock and remote implementations.

pub mod api;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod otp;
pub mod user;
pub mod validate;
pub mod vault;

// Re-export common error type
pub use error::{GlowbookError, Result};

pub use api::StorefrontApi;
pub use vault::SessionVault;
