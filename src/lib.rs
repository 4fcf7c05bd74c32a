//! Wallet viewer data layer.
//!
//! Maintains a locally persisted list of watched blockchain addresses and
//! exposes fetched balances and paginated transaction histories from a remote
//! wallet service:
//!
//! - **Service client**: fixed-shape HTTP calls wrapped in a two-level
//!   response envelope, degraded to empty results on any failure
//! - **Wallet registry**: durable list of watched addresses with a single
//!   current selection
//! - **View-state store**: fetched data, pagination bookkeeping, loading
//!   flags, and change events for reactive UIs

pub mod config;
pub mod error;
pub mod registry;
pub mod service;
pub mod storage;
pub mod store;

pub use config::ViewerConfig;
pub use error::{ServiceError, StorageError};
pub use registry::WalletRegistry;
pub use service::{AssetInfo, Currency, Page, ServiceClient, TokenTransferItem, TransactionItem};
pub use storage::{FileStorage, MemoryStorage, StorageBackend, Wallet};
pub use store::{StoreEvent, WalletStore};
