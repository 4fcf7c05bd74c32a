//! Data models for wallet storage

use serde::{Deserialize, Serialize};

/// One watched address. Addresses are stored lowercased and are unique
/// within the registry, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub address: String,
    pub name: String,
    pub chain_id: u32,
}
