/// Shared test infrastructure: a seeded mock backend plus a store wired to it.
use backend_mock::{FailureMode, SharedState};
use serde_json::{json, Value};
use wallet_viewer::{MemoryStorage, ServiceClient, WalletRegistry, WalletStore};

pub const ADDR_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const ADDR_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

pub struct TestEnvironment {
    pub state: SharedState,
    pub base_url: String,
    pub store: WalletStore<MemoryStorage>,
}

impl TestEnvironment {
    pub async fn new() -> anyhow::Result<Self> {
        let state = backend_mock::shared();
        let addr = backend_mock::spawn(state.clone()).await?;
        let base_url = format!("http://{}", addr);

        let client = ServiceClient::new(base_url.clone());
        let registry = WalletRegistry::load(MemoryStorage::new());

        Ok(Self {
            state,
            base_url,
            store: WalletStore::new(client, registry),
        })
    }

    pub fn seed_assets(&self, balances_usd: &[&str]) {
        self.state.lock().unwrap().assets =
            balances_usd.iter().map(|usd| sample_asset(usd)).collect();
    }

    pub fn seed_transactions(&self, count: usize) {
        self.state.lock().unwrap().transactions = (0..count).map(sample_transaction).collect();
    }

    pub fn seed_transfers(&self, count: usize) {
        self.state.lock().unwrap().transfers = (0..count).map(sample_transfer).collect();
    }

    pub fn seed_currencies(&self, currencies: Vec<Value>) {
        self.state.lock().unwrap().currencies = currencies;
    }

    pub fn set_failure(&self, mode: Option<FailureMode>) {
        self.state.lock().unwrap().failure = mode;
    }
}

pub fn sample_asset(balance_usd: &str) -> Value {
    json!({
        "blockchain": "optimism",
        "tokenName": "Ether",
        "tokenSymbol": "ETH",
        "tokenDecimals": 18,
        "tokenType": 1,
        "holderAddress": ADDR_A,
        "balance": "1.5",
        "balanceRawInteger": "1500000000000000000",
        "balanceUsd": balance_usd,
        "tokenPrice": "2000.00",
        "thumbnail": "eth.svg"
    })
}

pub fn sample_transaction(i: usize) -> Value {
    json!({
        "hash": format!("0xhash{:04}", i),
        "from": ADDR_A,
        "to": ADDR_B,
        "value": "1000000000000000000",
        "gas": "21000",
        "gasPrice": "1500000000",
        "gasUsed": "21000",
        "nonce": i.to_string(),
        "blockNumber": (100 + i).to_string(),
        "blockHash": format!("0xblock{:04}", 100 + i),
        "transactionIndex": "0",
        "type": "2",
        "status": "1",
        "input": "0x",
        "timestamp": "1700000000",
        "blockchain": "optimism",
        "cumulativeGasUsed": "21000",
        "v": "0x0",
        "r": "0x0",
        "s": "0x0"
    })
}

pub fn sample_transfer(i: usize) -> Value {
    json!({
        "fromAddress": ADDR_A,
        "toAddress": ADDR_B,
        "contractAddress": "0xcccccccccccccccccccccccccccccccccccccccc",
        "value": "25.0",
        "valueRawInteger": "25000000",
        "blockchain": "optimism",
        "tokenName": "USD Coin",
        "tokenSymbol": "USDC",
        "tokenDecimals": 6,
        "transactionHash": format!("0xtransfer{:04}", i),
        "blockHeight": 200 + i,
        "timestamp": 1700000000 + i
    })
}
