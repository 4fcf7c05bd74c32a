//! Storage and persistence layer
//!
//! - Pluggable storage backends
//! - Persisted data models

mod file_system;
mod models;

pub use file_system::{FileStorage, MemoryStorage, StorageBackend};
pub use models::Wallet;
