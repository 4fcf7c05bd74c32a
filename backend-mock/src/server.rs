/// Axum server setup and routing for the wallet service mock
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::state::SharedState;

pub fn create_router(state: SharedState) -> Router {
    // Allow the wallet frontend/tests to call from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/grpc/WalletBalanceService/GetBalance",
            post(handlers::get_balance),
        )
        .route(
            "/grpc/WalletTransactionService/GetRawTransactionHistory",
            post(handlers::get_transactions),
        )
        .route(
            "/grpc/WalletTransactionService/GetTokenTransferHistory",
            post(handlers::get_token_transfers),
        )
        .route(
            "/grpc/WalletCurrencyService/GetSupportedCurrencies",
            post(handlers::get_currencies),
        )
        .with_state(state)
        .layer(cors)
}

/// Spawn the mock on an ephemeral port. Returns the bound address; the
/// server task runs until the runtime shuts down.
pub async fn spawn(state: SharedState) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = create_router(state);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("mock server error: {}", e);
        }
    });

    Ok(addr)
}

pub async fn run_server(state: SharedState, host: String, port: u16) -> anyhow::Result<()> {
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("wallet service mock listening on http://{}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
