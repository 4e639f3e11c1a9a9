use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::json;

use tally_ledger::{LedgerReader, LedgerWriter};
use tally_protocol::{BalanceResponse, HealthResponse, TransferRequest, TransferResponse};

use crate::error::ServerResult;
use crate::router::AppState;

/// `GET /balance/:account`
pub async fn balance_handler(
    State(state): State<AppState>,
    Path(account): Path<String>,
) -> ServerResult<Json<BalanceResponse>> {
    let balance = state.ledger.get_balance(&account)?;
    Ok(Json(BalanceResponse::new(account, balance)))
}

/// `POST /transfer`
///
/// The body is decoded by hand so that every malformed body, whatever its
/// content type, is reported the same way.
pub async fn transfer_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> ServerResult<Json<TransferResponse>> {
    let req: TransferRequest = tally_protocol::decode(&body)?;
    let receipt = state.ledger.transfer(&req.from, &req.to, req.amount)?;
    tracing::info!(
        from = %receipt.from,
        to = %receipt.to,
        amount = receipt.amount,
        from_balance = receipt.from_balance,
        to_balance = receipt.to_balance,
        "transfer complete"
    );
    Ok(Json(TransferResponse::ok()))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler(State(state): State<AppState>) -> ServerResult<Json<serde_json::Value>> {
    let accounts = state.ledger.account_count()?;
    Ok(Json(json!({
        "name": "tally-server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": tally_protocol::API_VERSION,
        "accounts": accounts,
    })))
}
