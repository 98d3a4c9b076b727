//! Supra `ISupraSValueFeed` consumer adapter.
//!
//! This module provides functionality to read price feeds through an oracle
//! consumer contract:
//! - Call `getPrice` for a pair index
//! - Turn the returned record into formatted quotes

/// Contract binding.
pub mod contract;
/// Request/quote service.
pub mod reader;

pub use contract::SValueFeed;
pub use reader::PriceReader;
