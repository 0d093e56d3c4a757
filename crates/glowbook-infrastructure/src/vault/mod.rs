//! Session vault implementations.
//!
//! `FileVault` persists across restarts; `MemoryVault` serves tests and
//! fresh-state scenarios.

mod file_vault;
mod memory_vault;

pub use file_vault::FileVault;
pub use memory_vault::MemoryVault;
