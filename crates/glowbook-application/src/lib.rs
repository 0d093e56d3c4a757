//! Application layer for Glowbook.
//!
//! This crate coordinates the domain and infrastructure layers into the
//! stateful pieces a frontend binds to: the authentication session, the
//! booking selection, and the composition root that picks the mock or
//! remote API facade at startup.

pub mod auth;
pub mod bootstrap;
pub mod selection;

pub use auth::AuthSession;
pub use bootstrap::{AppContext, build_api};
pub use selection::BookingSelection;
