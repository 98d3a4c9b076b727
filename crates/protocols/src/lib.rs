//! On-chain oracle access.
//!
//! This crate connects the domain model to a live chain:
//! - A narrow provider capability (`connect`, read-only `call`)
//! - A JSON-RPC implementation of that capability
//! - ABI encoding for the oracle's `getPrice` view
//! - A contract binding and a request/quote service on top of it

/// Prelude module for convenient imports.
pub mod prelude;

/// ABI bindings and addresses.
pub mod abi;
/// Provider configuration.
pub mod config;
/// Error types.
pub mod error;
/// Provider capability trait.
pub mod provider;
/// JSON-RPC provider.
pub mod rpc;
/// Supra value feed consumer.
pub mod supra;

#[cfg(test)]
pub(crate) mod mock;

pub use abi::{Address, parse_address};
pub use config::OracleConfig;
pub use error::ProtocolError;
pub use provider::{OracleProvider, Session};
pub use rpc::JsonRpcProvider;
pub use supra::{PriceReader, SValueFeed};
