/// Axum handlers for the mocked wallet service endpoints
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::state::{FailureMode, SharedState};

/// Request body shared by all four endpoints; balance and currency calls
/// simply omit the paging fields.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[allow(dead_code)]
    pub system_chain_id: u32,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub cursor: Option<String>,
}

fn default_limit() -> usize {
    5
}

fn envelope(result: Value) -> Value {
    json!({
        "code": 0,
        "message": "Success",
        "data": { "code": 0, "message": "Success", "result": result }
    })
}

fn failure_response(mode: FailureMode) -> Response {
    match mode {
        FailureMode::Http500 => {
            (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
        }
        FailureMode::OuterError => {
            Json(json!({ "code": 13, "message": "backend unavailable" })).into_response()
        }
        FailureMode::InnerError => Json(json!({
            "code": 0,
            "message": "Success",
            "data": { "code": 7, "message": "chain scan failed" }
        }))
        .into_response(),
    }
}

/// Slice `items` at the numeric-offset cursor and wrap the page under `key`,
/// adding `nextPageToken` when more items remain.
fn paginate(items: &[Value], limit: usize, cursor: Option<&str>, key: &str) -> Value {
    let offset = cursor
        .and_then(|c| c.parse::<usize>().ok())
        .unwrap_or(0)
        .min(items.len());
    let end = (offset + limit).min(items.len());
    let page = items[offset..end].to_vec();

    let mut result = json!({ key: page });
    if end < items.len() {
        result["nextPageToken"] = Value::from(end.to_string());
    }
    result
}

/// GET /health
pub async fn health_check() -> &'static str {
    "ok"
}

/// POST /grpc/WalletBalanceService/GetBalance
pub async fn get_balance(
    State(state): State<SharedState>,
    Json(req): Json<ServiceRequest>,
) -> Response {
    let state = state.lock().unwrap();
    if let Some(mode) = state.failure {
        return failure_response(mode);
    }
    log::debug!("balance request for {:?}", req.address);
    Json(envelope(json!({ "assets": state.assets }))).into_response()
}

/// POST /grpc/WalletTransactionService/GetRawTransactionHistory
pub async fn get_transactions(
    State(state): State<SharedState>,
    Json(req): Json<ServiceRequest>,
) -> Response {
    let state = state.lock().unwrap();
    if let Some(mode) = state.failure {
        return failure_response(mode);
    }
    log::debug!(
        "transaction page for {:?} (cursor {:?})",
        req.address,
        req.cursor
    );
    Json(envelope(paginate(
        &state.transactions,
        req.limit,
        req.cursor.as_deref(),
        "transactions",
    )))
    .into_response()
}

/// POST /grpc/WalletTransactionService/GetTokenTransferHistory
pub async fn get_token_transfers(
    State(state): State<SharedState>,
    Json(req): Json<ServiceRequest>,
) -> Response {
    let state = state.lock().unwrap();
    if let Some(mode) = state.failure {
        return failure_response(mode);
    }
    Json(envelope(paginate(
        &state.transfers,
        req.limit,
        req.cursor.as_deref(),
        "transfers",
    )))
    .into_response()
}

/// POST /grpc/WalletCurrencyService/GetSupportedCurrencies
pub async fn get_currencies(
    State(state): State<SharedState>,
    Json(_req): Json<ServiceRequest>,
) -> Response {
    let state = state.lock().unwrap();
    if let Some(mode) = state.failure {
        return failure_response(mode);
    }
    Json(envelope(json!({ "currencies": state.currencies }))).into_response()
}
