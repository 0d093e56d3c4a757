//! Durable storage primitives shared by the vault implementations.

mod json_store;

pub use json_store::{FileLock, JsonFile};
