//! Persistent registry of watched addresses.

use crate::service::CHAIN_ID;
use crate::storage::{StorageBackend, Wallet};

/// The user's list of watched wallets, persisted through an injected storage
/// backend. At most one wallet is current at a time.
///
/// Validation failures surface as a boolean return; persistence failures are
/// logged and never fail the operation (worst case the list does not survive
/// a restart).
pub struct WalletRegistry<S: StorageBackend> {
    storage: S,
    wallets: Vec<Wallet>,
    current: Option<usize>,
}

impl<S: StorageBackend> WalletRegistry<S> {
    /// Load the persisted wallet list. Unreadable or malformed contents
    /// reset the registry to empty rather than propagating. If the list is
    /// non-empty the first wallet becomes current.
    pub fn load(storage: S) -> Self {
        let wallets = match storage.read() {
            Ok(Some(contents)) => match serde_json::from_str::<Vec<Wallet>>(&contents) {
                Ok(wallets) => wallets,
                Err(e) => {
                    log::error!("failed to parse stored wallet list: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                log::error!("failed to read stored wallet list: {}", e);
                Vec::new()
            }
        };

        let current = if wallets.is_empty() { None } else { Some(0) };
        Self {
            storage,
            wallets,
            current,
        }
    }

    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    pub fn current(&self) -> Option<&Wallet> {
        self.current.map(|i| &self.wallets[i])
    }

    /// Register a new address. Rejects malformed addresses and
    /// case-insensitive duplicates. On success the address is stored
    /// lowercased, the list is persisted, and the new wallet becomes current.
    pub fn add(&mut self, address: &str, name: Option<&str>) -> bool {
        if !is_valid_address(address) {
            log::warn!("rejected invalid address: {}", address);
            return false;
        }
        if self
            .wallets
            .iter()
            .any(|w| w.address.eq_ignore_ascii_case(address))
        {
            log::warn!("address already registered: {}", address);
            return false;
        }

        let name = name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Wallet {}", self.wallets.len() + 1));
        self.wallets.push(Wallet {
            address: address.to_lowercase(),
            name,
            chain_id: CHAIN_ID,
        });
        self.save();

        self.current = Some(self.wallets.len() - 1);
        true
    }

    /// Remove an address. Returns false if not found. If the removed wallet
    /// was current, the first remaining wallet becomes current (or nothing,
    /// if the list is now empty).
    pub fn remove(&mut self, address: &str) -> bool {
        let Some(index) = self
            .wallets
            .iter()
            .position(|w| w.address.eq_ignore_ascii_case(address))
        else {
            return false;
        };

        self.wallets.remove(index);
        self.save();

        match self.current {
            Some(cur) if cur == index => {
                self.current = if self.wallets.is_empty() { None } else { Some(0) };
            }
            Some(cur) if cur > index => self.current = Some(cur - 1),
            _ => {}
        }
        true
    }

    /// Make the wallet at `address` current. Returns false if not found.
    pub fn select(&mut self, address: &str) -> bool {
        match self
            .wallets
            .iter()
            .position(|w| w.address.eq_ignore_ascii_case(address))
        {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    fn save(&self) {
        let json = match serde_json::to_string_pretty(&self.wallets) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize wallet list: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.write(&json) {
            log::error!("failed to persist wallet list: {}", e);
        }
    }
}

/// `0x` followed by exactly 40 hex digits.
pub fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_validation() {
        assert!(is_valid_address(&format!("0x{}", "a".repeat(40))));
        assert!(is_valid_address(&format!("0x{}", "A1b2C3d4".repeat(5))));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("0x"));
        assert!(!is_valid_address(&format!("0x{}", "a".repeat(39))));
        assert!(!is_valid_address(&format!("0x{}", "a".repeat(41))));
        assert!(!is_valid_address(&format!("0x{}", "g".repeat(40))));
        assert!(!is_valid_address(&"a".repeat(42)));
    }
}
