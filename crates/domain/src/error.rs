//! Validation errors raised while building or formatting scaled amounts.

/// Errors produced by the fixed-point formatter and its value objects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The magnitude is negative or not a well-formed non-negative integer.
    #[error("invalid raw amount: {0}")]
    InvalidRawAmount(String),
    /// The decimal count is negative or out of range.
    #[error("invalid decimal count: {0}")]
    InvalidDecimalCount(String),
}
