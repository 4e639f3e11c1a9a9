use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use tally_ledger::LedgerError;
use tally_protocol::{error_codes, ErrorBody, ProtocolError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid request body: {0}")]
    BadRequest(#[from] ProtocolError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    /// Status code and machine-readable error code for the response.
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, error_codes::INVALID_JSON),
            Self::Ledger(LedgerError::InvalidAmount { .. }) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_AMOUNT)
            }
            Self::Ledger(LedgerError::InsufficientFunds { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, error_codes::INSUFFICIENT_FUNDS)
            }
            Self::Ledger(LedgerError::NotFound(_)) => (StatusCode::NOT_FOUND, error_codes::NOT_FOUND),
            Self::Ledger(LedgerError::LockPoisoned)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, error_codes::INTERNAL),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }
        (status, Json(ErrorBody::new(code, self.to_string()))).into_response()
    }
}
