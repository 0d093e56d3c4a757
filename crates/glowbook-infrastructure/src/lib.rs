//! Infrastructure for the Glowbook client: durable vaults, configuration
//! loading, platform paths, and the mock backend.

pub mod mock;
pub mod paths;
pub mod settings;
pub mod storage;
pub mod vault;

pub use mock::MockApi;
pub use vault::{FileVault, MemoryVault};
