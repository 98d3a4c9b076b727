use crate::error::FormatError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact decimal rendering of a scaled amount, meant for presentation.
///
/// The string form is lossless. [`DisplayValue::to_approximate_number`] is a
/// convenience for display code that wants an `f64`: any value with more
/// significant digits than the 53-bit mantissa can hold (roughly 15-17 decimal
/// digits) is rounded, so it must not feed further arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayValue(String);

impl DisplayValue {
    /// Wraps a string already produced by the formatter.
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn integer_part(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(int, _)| int)
    }

    /// Fractional digits, or `None` for a value formatted without a decimal point.
    pub fn fractional_part(&self) -> Option<&str> {
        self.0.split_once('.').map(|(_, frac)| frac)
    }

    /// Lossy conversion to `f64`.
    pub fn to_approximate_number(&self) -> f64 {
        // Always digits with at most one point, which `f64` parses.
        self.0.parse::<f64>().unwrap_or(f64::NAN)
    }

    /// Exact conversion to `Decimal`, or `None` when it would need rounding.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::from_str_exact(&self.0).ok()
    }
}

/// Accepts only what the formatter emits: digits, optionally followed by a
/// point and at least one fractional digit.
impl TryFrom<String> for DisplayValue {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (int, frac) = match value.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (value.as_str(), None),
        };
        let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(int) || frac.is_some_and(|f| !is_digits(f)) {
            return Err(FormatError::InvalidRawAmount(format!(
                "{value:?} is not a formatted decimal"
            )));
        }
        Ok(Self(value))
    }
}

impl From<DisplayValue> for String {
    fn from(value: DisplayValue) -> Self {
        value.0
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
