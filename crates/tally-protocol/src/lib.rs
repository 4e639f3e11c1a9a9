//! Wire protocol for Tally.
//!
//! Defines the JSON bodies exchanged between clients and the ledger server,
//! the endpoint paths, and the decoder for request bodies.

pub mod codec;
pub mod endpoint;
pub mod error;
pub mod message;

pub use codec::decode;
pub use endpoint::{endpoints, HealthResponse};
pub use error::{ProtocolError, ProtocolResult};
pub use message::{
    error_codes, BalanceResponse, ErrorBody, TransferRequest, TransferResponse, API_VERSION,
};
