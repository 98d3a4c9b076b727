//! JSON-RPC 2.0 provider over HTTP.
//!
//! Speaks the three Ethereum methods the reader needs: `eth_chainId`,
//! `eth_accounts` and `eth_call`.

use crate::abi::{self, Address};
use crate::config::OracleConfig;
use crate::error::ProtocolError;
use crate::provider::{OracleProvider, Session};
use alloy_primitives::hex;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Provider backed by a node's HTTP JSON-RPC endpoint.
pub struct JsonRpcProvider {
    /// The underlying HTTP client.
    http_client: Client,
    /// JSON-RPC endpoint.
    rpc_url: String,
    /// Id for the next request.
    next_id: AtomicU64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl JsonRpcProvider {
    /// Creates a provider for `rpc_url` with the given request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(rpc_url: impl Into<String>, timeout: Duration) -> Result<Self, ProtocolError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http_client, rpc_url))
    }

    /// Creates a provider around an already configured HTTP client.
    pub fn with_client(http_client: Client, rpc_url: impl Into<String>) -> Self {
        Self {
            http_client,
            rpc_url: rpc_url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn from_config(config: &OracleConfig) -> Result<Self, ProtocolError> {
        Self::new(config.rpc_url.clone(), config.timeout())
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value, ProtocolError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = request_body(id, method, params);
        debug!(method, id, url = %self.rpc_url, "Sending JSON-RPC request");

        let response = self
            .http_client
            .post(&self.rpc_url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            warn!(method, status = %response.status(), "JSON-RPC HTTP failure");
            return Err(ProtocolError::HttpStatus(response.status().as_u16()));
        }

        let bytes = response.bytes().await?;
        let envelope: RpcResponse = serde_json::from_slice(&bytes)?;
        into_result(envelope).inspect_err(|e| warn!(method, error = %e, "JSON-RPC call failed"))
    }
}

#[async_trait]
impl OracleProvider for JsonRpcProvider {
    async fn connect(&self) -> Result<Session, ProtocolError> {
        let chain_id = parse_quantity(&self.request("eth_chainId", json!([])).await?)?;
        let accounts = parse_addresses(&self.request("eth_accounts", json!([])).await?)?;
        Ok(Session { chain_id, accounts })
    }

    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        parse_bytes(&self.request("eth_call", call_params(to, data)).await?)
    }
}

fn request_body(id: u64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params,
    })
}

/// `eth_call` params: a call object with lowercase hex fields, at `latest`.
fn call_params(to: &Address, data: &[u8]) -> Value {
    json!([
        {
            "to": hex::encode_prefixed(to),
            "data": hex::encode_prefixed(data),
        },
        "latest"
    ])
}

fn into_result(envelope: RpcResponse) -> Result<Value, ProtocolError> {
    if let Some(error) = envelope.error {
        return Err(ProtocolError::Rpc {
            code: error.code,
            message: error.message,
        });
    }
    envelope
        .result
        .ok_or_else(|| ProtocolError::Decode("response has neither result nor error".to_string()))
}

fn as_hex_str(value: &Value) -> Result<&str, ProtocolError> {
    let s = value
        .as_str()
        .ok_or_else(|| ProtocolError::Decode(format!("expected hex string, got {value}")))?;
    s.strip_prefix("0x")
        .ok_or_else(|| ProtocolError::Decode(format!("missing 0x prefix in {s:?}")))
}

/// Parses a hex `QUANTITY` such as `"0x1"`.
fn parse_quantity(value: &Value) -> Result<u64, ProtocolError> {
    let digits = as_hex_str(value)?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| ProtocolError::Decode(format!("bad quantity {value}: {e}")))
}

/// Parses hex `DATA` such as `"0x00ff"`.
fn parse_bytes(value: &Value) -> Result<Vec<u8>, ProtocolError> {
    let digits = as_hex_str(value)?;
    hex::decode(digits).map_err(|e| ProtocolError::Decode(format!("bad data {value}: {e}")))
}

fn parse_addresses(value: &Value) -> Result<Vec<Address>, ProtocolError> {
    let items = value
        .as_array()
        .ok_or_else(|| ProtocolError::Decode(format!("expected address list, got {value}")))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or_else(|| ProtocolError::Decode(format!("expected address, got {item}")))
                .and_then(abi::parse_address)
        })
        .collect()
}
