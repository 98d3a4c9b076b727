//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use oracle_domain::prelude::*;
//! ```

// Entities
pub use crate::entities::{PairId, PriceFeed, PriceQuote, PriceRequest, QuoteBoard, RequestId};

// Errors
pub use crate::error::FormatError;

// Formatting
pub use crate::math::fixed_point::{format_str, format_units, parse_units, to_approximate_number};

// Value objects
pub use crate::value_objects::{DecimalCount, DisplayValue, RawAmount, ScaledAmount};
