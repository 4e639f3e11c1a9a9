use std::collections::BTreeMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server settings, loadable from a TOML file.
///
/// ```toml
/// bind_addr = "0.0.0.0:8080"
///
/// [seed]
/// alice = 100.0
/// bob = 50.0
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Starting balances loaded into the ledger at boot.
    pub seed: BTreeMap<String, f64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            seed: BTreeMap::from([("alice".to_string(), 100.0), ("bob".to_string(), 50.0)]),
        }
    }
}

impl ServerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string(self).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Seed balances must be finite and account names non-empty.
    pub fn validate(&self) -> ServerResult<()> {
        for (name, balance) in &self.seed {
            if name.is_empty() {
                return Err(ServerError::Config("seed account name is empty".into()));
            }
            if !balance.is_finite() {
                return Err(ServerError::Config(format!(
                    "seed balance for {name} is not finite: {balance}"
                )));
            }
        }
        Ok(())
    }
}
