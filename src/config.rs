/// Viewer configuration from environment variables
///
/// Controls the remote wallet service base URL and where the watched-address
/// list is persisted.
use std::env;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:4002";
pub const DEFAULT_STORAGE_PATH: &str = "./wallets/addresses.json";

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    /// Base URL of the remote wallet service
    pub api_url: String,
    /// File holding the serialized wallet list
    pub storage_path: PathBuf,
}

impl ViewerConfig {
    /// Load configuration from environment variables
    ///
    /// - `WALLET_API_URL`: remote service base URL (default `http://localhost:4002`)
    /// - `WALLET_STORAGE_PATH`: wallet list file (default `./wallets/addresses.json`)
    pub fn from_env() -> Self {
        let api_url = env::var("WALLET_API_URL").unwrap_or_else(|_| {
            log::info!("Wallet service URL: {} (default)", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        });

        let storage_path = env::var("WALLET_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                log::info!("Wallet storage: {} (default)", DEFAULT_STORAGE_PATH);
                PathBuf::from(DEFAULT_STORAGE_PATH)
            });

        Self {
            api_url,
            storage_path,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ViewerConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
    }
}
