use serde::de::DeserializeOwned;
use serde_json::json;

use super::types::{
    AssetInfo, BalanceResult, Currency, CurrencyResult, Envelope, Page, TokenTransferHistoryResult,
    TokenTransferItem, TransactionHistoryResult, TransactionItem,
};
use crate::error::ServiceError;

/// Chain identifier sent with every request (Optimism).
pub const CHAIN_ID: u32 = 3;

/// Page size requested from the history endpoints.
const PAGE_SIZE: u32 = 5;

/// Client for the remote balance/transaction/currency service.
///
/// Every operation is a single HTTP POST with a JSON body carrying the
/// hardcoded chain identifier and the caller-supplied address. Transport
/// failures, non-success envelope codes at either nesting level, and
/// malformed bodies are all treated identically: the failure is logged and
/// the operation returns an empty result. Callers cannot distinguish "no
/// data" from "request failed".
pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch all token balances for an address.
    pub async fn get_balance(&self, address: &str) -> Vec<AssetInfo> {
        match self.try_get_balance(address).await {
            Ok(assets) => {
                log::debug!("fetched {} assets for {}", assets.len(), address);
                assets
            }
            Err(e) => {
                log::error!("balance fetch for {} failed: {}", address, e);
                Vec::new()
            }
        }
    }

    /// Fetch one page of raw transaction history. `cursor` of `None` starts
    /// from the head of the history.
    pub async fn get_transactions(
        &self,
        address: &str,
        cursor: Option<&str>,
    ) -> Page<TransactionItem> {
        match self.try_get_transactions(address, cursor).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("transaction history fetch for {} failed: {}", address, e);
                Page::empty()
            }
        }
    }

    /// Fetch one page of token-transfer history.
    pub async fn get_token_transactions(
        &self,
        address: &str,
        cursor: Option<&str>,
    ) -> Page<TokenTransferItem> {
        match self.try_get_token_transactions(address, cursor).await {
            Ok(page) => page,
            Err(e) => {
                log::error!("token transfer fetch for {} failed: {}", address, e);
                Page::empty()
            }
        }
    }

    /// Fetch the list of currencies the service supports.
    pub async fn get_supported_currencies(&self) -> Vec<Currency> {
        match self.try_get_supported_currencies().await {
            Ok(currencies) => currencies,
            Err(e) => {
                log::error!("supported currencies fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_get_balance(&self, address: &str) -> Result<Vec<AssetInfo>, ServiceError> {
        let body = json!({
            "systemChainId": CHAIN_ID,
            "address": address,
        });
        let envelope: Envelope<BalanceResult> = self
            .post("/grpc/WalletBalanceService/GetBalance", &body)
            .await?;
        Ok(envelope.into_result()?.map(|r| r.assets).unwrap_or_default())
    }

    async fn try_get_transactions(
        &self,
        address: &str,
        cursor: Option<&str>,
    ) -> Result<Page<TransactionItem>, ServiceError> {
        let body = history_body(address, cursor);
        let envelope: Envelope<TransactionHistoryResult> = self
            .post("/grpc/WalletTransactionService/GetRawTransactionHistory", &body)
            .await?;
        let result = envelope.into_result()?.unwrap_or_default();
        Ok(page(result.transactions, result.next_page_token))
    }

    async fn try_get_token_transactions(
        &self,
        address: &str,
        cursor: Option<&str>,
    ) -> Result<Page<TokenTransferItem>, ServiceError> {
        let body = history_body(address, cursor);
        let envelope: Envelope<TokenTransferHistoryResult> = self
            .post("/grpc/WalletTransactionService/GetTokenTransferHistory", &body)
            .await?;
        let result = envelope.into_result()?.unwrap_or_default();
        Ok(page(result.transfers, result.next_page_token))
    }

    async fn try_get_supported_currencies(&self) -> Result<Vec<Currency>, ServiceError> {
        let body = json!({ "systemChainId": CHAIN_ID });
        let envelope: Envelope<CurrencyResult> = self
            .post("/grpc/WalletCurrencyService/GetSupportedCurrencies", &body)
            .await?;
        Ok(envelope
            .into_result()?
            .map(|r| r.currencies)
            .unwrap_or_default())
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ServiceError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::Http(response.status()));
        }

        Ok(response.json().await?)
    }
}

fn history_body(address: &str, cursor: Option<&str>) -> serde_json::Value {
    let mut body = json!({
        "systemChainId": CHAIN_ID,
        "address": address,
        "limit": PAGE_SIZE,
    });
    if let Some(cursor) = cursor {
        body["cursor"] = serde_json::Value::from(cursor);
    }
    body
}

fn page<T>(items: Vec<T>, next_page_token: Option<String>) -> Page<T> {
    // An empty token means end of history, same as an absent one.
    let next_cursor = next_page_token.filter(|t| !t.is_empty());
    Page {
        items,
        has_more: next_cursor.is_some(),
        next_cursor,
    }
}
