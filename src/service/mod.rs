//! Remote wallet service client
//!
//! - Fixed-shape HTTP operations with failure degradation
//! - Wire models and the two-level response envelope

mod client;
pub mod types;

pub use client::{ServiceClient, CHAIN_ID};
pub use types::{AssetInfo, Currency, Page, TokenTransferItem, TransactionItem};
