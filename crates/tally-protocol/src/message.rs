use serde::{Deserialize, Serialize};

pub const API_VERSION: u32 = 1;

/// Body of `POST /transfer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// Body of a successful `GET /balance/:account`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub account: String,
    pub balance: f64,
}

impl BalanceResponse {
    /// Build a response with the balance rounded to cents for display.
    ///
    /// Balances too large to scale by 100 are passed through unrounded.
    pub fn new(account: impl Into<String>, balance: f64) -> Self {
        let cents = (balance * 100.0).round() / 100.0;
        Self {
            account: account.into(),
            balance: if cents.is_finite() { cents } else { balance },
        }
    }
}

/// Body of a successful `POST /transfer`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransferResponse {
    pub status: String,
}

impl TransferResponse {
    pub fn ok() -> Self {
        Self { status: "ok".into() }
    }
}

/// Body of every non-2xx response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// Machine-readable values of [`ErrorBody::error`].
pub mod error_codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const INVALID_JSON: &str = "invalid_json";
    pub const INVALID_AMOUNT: &str = "invalid_amount";
    pub const INSUFFICIENT_FUNDS: &str = "insufficient_funds";
    pub const INTERNAL: &str = "internal_error";
}
