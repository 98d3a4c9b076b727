//! Domain model for reading oracle price feeds.
//!
//! This crate holds the pure parts of the workspace:
//! - Arbitrary-precision raw amounts and decimal counts
//! - Exact fixed-point formatting and its inverse
//! - Oracle price records and request/quote values

/// Prelude module for convenient imports.
pub mod prelude;

/// Oracle records and request/response values.
pub mod entities;
/// Validation errors.
pub mod error;
/// Fixed-point arithmetic on digit strings.
pub mod math;
/// Amount value objects.
pub mod value_objects;

pub use error::FormatError;
