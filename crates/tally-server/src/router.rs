use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use tally_ledger::Ledger;
use tally_protocol::endpoints;

use crate::handler;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<dyn Ledger>,
}

impl AppState {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }
}

/// Build the axum router with all ledger endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::BALANCE, get(handler::balance_handler))
        .route(endpoints::TRANSFER, post(handler::transfer_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
