//! In-memory provider for tests.

use crate::abi::{Address, priceFeed};
use crate::error::ProtocolError;
use crate::provider::{OracleProvider, Session};
use alloy_primitives::U256;
use alloy_sol_types::SolValue;
use async_trait::async_trait;
use std::sync::Mutex;

/// Answers every call with a fixed response and records what was sent.
pub(crate) struct MockProvider {
    response: Result<Vec<u8>, (i64, String)>,
    pub(crate) calls: Mutex<Vec<(Address, Vec<u8>)>>,
}

impl MockProvider {
    pub(crate) fn returning(data: Vec<u8>) -> Self {
        Self {
            response: Ok(data),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn reverting(message: &str) -> Self {
        Self {
            response: Err((3, message.to_string())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OracleProvider for MockProvider {
    async fn connect(&self) -> Result<Session, ProtocolError> {
        Ok(Session {
            chain_id: 31337,
            accounts: Vec::new(),
        })
    }

    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        self.calls.lock().unwrap().push((*to, data.to_vec()));
        match &self.response {
            Ok(bytes) => Ok(bytes.clone()),
            Err((code, message)) => Err(ProtocolError::Rpc {
                code: *code,
                message: message.clone(),
            }),
        }
    }
}

/// ABI-encoded `priceFeed` as returned by `getPrice`.
pub(crate) fn price_feed_response(round: u64, decimals: u64, time: u64, price: u128) -> Vec<u8> {
    priceFeed {
        round: U256::from(round),
        decimals: U256::from(decimals),
        time: U256::from(time),
        price: U256::from(price),
    }
    .abi_encode()
}
