//! Capability interface for whatever connects us to the chain.

use crate::abi::Address;
use crate::error::ProtocolError;
use async_trait::async_trait;
use std::sync::Arc;

/// Result of connecting to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub chain_id: u64,
    /// Accounts the provider exposes. May be empty; read-only calls need none.
    pub accounts: Vec<Address>,
}

/// The two operations a price reader needs from a wallet or node.
#[async_trait]
pub trait OracleProvider: Send + Sync {
    async fn connect(&self) -> Result<Session, ProtocolError>;

    /// Executes a read-only contract call against the latest block and returns
    /// the raw return data.
    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, ProtocolError>;
}

#[async_trait]
impl<P: OracleProvider + ?Sized> OracleProvider for Arc<P> {
    async fn connect(&self) -> Result<Session, ProtocolError> {
        (**self).connect().await
    }

    async fn call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, ProtocolError> {
        (**self).call(to, data).await
    }
}
