//! Provider configuration.

use crate::abi::{self, Address};
use crate::error::ProtocolError;
use std::time::Duration;

pub const ENV_RPC_URL: &str = "ORACLE_RPC_URL";
pub const ENV_CONTRACT_ADDRESS: &str = "ORACLE_CONTRACT_ADDRESS";
pub const ENV_TIMEOUT_SECS: &str = "ORACLE_TIMEOUT_SECS";

/// Configuration for reaching the oracle contract.
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// JSON-RPC HTTP endpoint.
    pub rpc_url: String,
    /// Oracle consumer contract exposing `getPrice`.
    pub contract_address: Option<Address>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            contract_address: None,
            timeout_secs: 30,
        }
    }
}

impl OracleConfig {
    /// Builds a config from `ORACLE_*` environment variables, falling back to
    /// defaults for any that are unset.
    pub fn from_env() -> Result<Self, ProtocolError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProtocolError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_RPC_URL) {
            config.rpc_url = url;
        }
        if let Some(address) = lookup(ENV_CONTRACT_ADDRESS) {
            config.contract_address = Some(abi::parse_address(&address)?);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = secs.parse().map_err(|e| {
                ProtocolError::Config(format!("{ENV_TIMEOUT_SECS}={secs:?}: {e}"))
            })?;
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured contract, or a configuration error naming the variable.
    pub fn require_contract(&self) -> Result<Address, ProtocolError> {
        self.contract_address.ok_or_else(|| {
            ProtocolError::Config(format!("contract address not set ({ENV_CONTRACT_ADDRESS})"))
        })
    }
}
