use wallet_viewer::{FileStorage, ServiceClient, ViewerConfig, WalletRegistry, WalletStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    // Initialize logger (set RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ViewerConfig::from_env();
    let storage = FileStorage::new_with_path(config.storage_path.clone());
    let registry = WalletRegistry::load(storage);
    let client = ServiceClient::new(config.api_url.clone());
    let mut store = WalletStore::new(client, registry);

    // Optional address argument: select it if known, register it otherwise.
    if let Some(address) = std::env::args().nth(1) {
        if !store.select_wallet(&address) && !store.add_wallet(&address, None) {
            anyhow::bail!("invalid address: {}", address);
        }
    }

    let Some(wallet) = store.current_wallet().cloned() else {
        log::info!("no wallets registered; pass an address to start watching one");
        return Ok(());
    };
    log::info!("watching {} ({})", wallet.name, wallet.address);

    store.fetch_balance().await;
    log::info!(
        "{} assets, total ${}",
        store.assets().len(),
        store.total_balance()
    );
    for asset in store.assets() {
        log::info!(
            "  {} {} (${})",
            asset.balance,
            asset.token_symbol,
            asset.balance_usd
        );
    }

    store.fetch_transactions(false).await;
    log::info!(
        "{} transactions (more available: {})",
        store.transactions().len(),
        store.has_more_transactions()
    );

    Ok(())
}
