//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use oracle_protocols::prelude::*;
//! ```

// ABI
pub use crate::abi::{Address, decode_price_feed, encode_get_price, getPriceCall, parse_address};

// Config
pub use crate::config::OracleConfig;

// Errors
pub use crate::error::ProtocolError;

// Providers
pub use crate::provider::{OracleProvider, Session};
pub use crate::rpc::JsonRpcProvider;

// Supra
pub use crate::supra::{PriceReader, SValueFeed};
