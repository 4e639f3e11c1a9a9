/// HTTP endpoint paths served by the ledger.
pub mod endpoints {
    pub const BALANCE: &str = "/balance/:account";
    pub const TRANSFER: &str = "/transfer";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub api_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            api_version: super::message::API_VERSION,
        }
    }
}
