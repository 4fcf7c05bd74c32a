//! Wire models for the remote wallet service.
//!
//! Every response arrives wrapped in a two-level `{code, message, data:
//! {code, message, result}}` envelope. Item shapes are kept lenient (missing
//! fields default to empty) since the service does not guarantee them.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Snapshot of one token balance for a wallet. Replaced wholesale on each
/// balance fetch, never merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetInfo {
    pub blockchain: String,
    pub token_name: String,
    pub token_symbol: String,
    pub token_decimals: u32,
    /// Numeric token type (1 = native, 2 = ERC-20, 3 = ERC-721, 4 = ERC-1155).
    /// Kept as a raw integer so unknown values do not poison a response parse.
    pub token_type: i32,
    pub contract_address: Option<String>,
    pub holder_address: String,
    pub balance: String,
    pub balance_raw_integer: String,
    pub balance_usd: String,
    pub token_price: String,
    pub thumbnail: String,
}

/// One on-chain transaction record. Immutable once fetched; accumulated
/// across pagination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionItem {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub value: String,
    pub gas: String,
    pub gas_price: String,
    pub gas_used: String,
    pub nonce: String,
    pub block_number: String,
    pub block_hash: String,
    pub transaction_index: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    pub status: String,
    pub input: String,
    pub timestamp: String,
    pub blockchain: String,
    pub cumulative_gas_used: String,
    pub v: String,
    pub r: String,
    pub s: String,
}

/// One token-transfer event. Same accumulation semantics as
/// [`TransactionItem`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenTransferItem {
    pub from_address: String,
    pub to_address: String,
    pub contract_address: String,
    pub value: String,
    pub value_raw_integer: String,
    pub blockchain: String,
    pub token_name: String,
    pub token_symbol: String,
    pub token_decimals: u32,
    pub thumbnail: Option<String>,
    pub transaction_hash: String,
    pub block_height: u64,
    pub timestamp: u64,
}

/// Supported-currency entry. The service does not document a stable shape,
/// so the raw JSON is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency(pub serde_json::Value);

/// One page of a paginated history list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub has_more: bool,
    /// Continuation token for the next page. `None` means no more pages.
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_more: false,
            next_cursor: None,
        }
    }
}

/// Outer response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub code: i64,
    pub message: Option<String>,
    pub data: Option<EnvelopeData<T>>,
}

/// Inner response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct EnvelopeData<T> {
    pub code: i64,
    pub message: Option<String>,
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    /// Validates both nesting levels and extracts the payload. A present but
    /// empty `result` is a valid empty response, not an error.
    pub fn into_result(self) -> Result<Option<T>, ServiceError> {
        if self.code != 0 {
            return Err(ServiceError::Envelope {
                code: self.code,
                message: self.message.unwrap_or_else(|| "unknown error".into()),
            });
        }
        let data = self.data.ok_or(ServiceError::Envelope {
            code: -1,
            message: "missing data field".into(),
        })?;
        if data.code != 0 {
            return Err(ServiceError::Envelope {
                code: data.code,
                message: data.message.unwrap_or_else(|| "unknown error".into()),
            });
        }
        Ok(data.result)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct BalanceResult {
    pub assets: Vec<AssetInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TransactionHistoryResult {
    pub transactions: Vec<TransactionItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct TokenTransferHistoryResult {
    pub transfers: Vec<TokenTransferItem>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct CurrencyResult {
    pub currencies: Vec<Currency>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_extracts_result() {
        let json = r#"{
            "code": 0,
            "message": "Success",
            "data": { "code": 0, "message": "Success", "result": { "assets": [{ "tokenSymbol": "ETH" }] } }
        }"#;
        let envelope: Envelope<BalanceResult> = serde_json::from_str(json).unwrap();
        let result = envelope.into_result().unwrap().unwrap();
        assert_eq!(result.assets.len(), 1);
        assert_eq!(result.assets[0].token_symbol, "ETH");
    }

    #[test]
    fn envelope_missing_result_is_empty() {
        let json = r#"{ "code": 0, "data": { "code": 0 } }"#;
        let envelope: Envelope<BalanceResult> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_result().unwrap().is_none());
    }

    #[test]
    fn envelope_outer_error_is_rejected() {
        let json = r#"{ "code": 13, "message": "backend unavailable" }"#;
        let envelope: Envelope<BalanceResult> = serde_json::from_str(json).unwrap();
        match envelope.into_result() {
            Err(ServiceError::Envelope { code, message }) => {
                assert_eq!(code, 13);
                assert_eq!(message, "backend unavailable");
            }
            other => panic!("expected envelope error, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn envelope_inner_error_is_rejected() {
        let json = r#"{ "code": 0, "data": { "code": 7, "message": "chain scan failed" } }"#;
        let envelope: Envelope<BalanceResult> = serde_json::from_str(json).unwrap();
        match envelope.into_result() {
            Err(ServiceError::Envelope { code, .. }) => assert_eq!(code, 7),
            other => panic!("expected envelope error, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn envelope_missing_data_is_rejected() {
        let json = r#"{ "code": 0, "message": "Success" }"#;
        let envelope: Envelope<BalanceResult> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_result().is_err());
    }

    #[test]
    fn transaction_items_tolerate_missing_fields() {
        let json = r#"{ "transactions": [{ "hash": "0xabc" }], "nextPageToken": "5" }"#;
        let result: TransactionHistoryResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.transactions[0].hash, "0xabc");
        assert_eq!(result.transactions[0].from, "");
        assert_eq!(result.next_page_token.as_deref(), Some("5"));
    }
}
