use crate::error::FormatError;
use crate::math::fixed_point::{format_units, parse_units};
use crate::value_objects::decimal_count::DecimalCount;
use crate::value_objects::display_value::DisplayValue;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Arbitrary-precision non-negative integer, stored as canonical base-10 digits.
///
/// Leading zeros are stripped on construction, so zero is always `"0"` and two
/// amounts compare equal exactly when their values are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RawAmount {
    digits: String,
}

impl RawAmount {
    pub fn zero() -> Self {
        Self {
            digits: "0".to_string(),
        }
    }

    /// Canonical digit string, without sign or leading zeros.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits == "0"
    }

    /// Narrows to `U256`, returning `None` when the value needs more than 256 bits.
    pub fn to_u256(&self) -> Option<U256> {
        U256::from_dec_str(&self.digits).ok()
    }

    fn from_canonical(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Self::zero()
        } else {
            Self {
                digits: trimmed.to_string(),
            }
        }
    }
}

impl FromStr for RawAmount {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(FormatError::InvalidRawAmount("empty input".to_string()));
        }
        if s.starts_with('-') {
            return Err(FormatError::InvalidRawAmount(format!("negative value {s:?}")));
        }
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_digit()) {
            return Err(FormatError::InvalidRawAmount(format!(
                "unexpected character {bad:?} in {s:?}"
            )));
        }
        Ok(Self::from_canonical(s))
    }
}

impl TryFrom<String> for RawAmount {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RawAmount> for String {
    fn from(value: RawAmount) -> Self {
        value.digits
    }
}

impl From<U256> for RawAmount {
    fn from(v: U256) -> Self {
        Self {
            digits: v.to_string(),
        }
    }
}

impl From<u64> for RawAmount {
    fn from(v: u64) -> Self {
        Self {
            digits: v.to_string(),
        }
    }
}

impl From<u128> for RawAmount {
    fn from(v: u128) -> Self {
        Self {
            digits: v.to_string(),
        }
    }
}

impl TryFrom<i64> for RawAmount {
    type Error = FormatError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        u64::try_from(v)
            .map(Self::from)
            .map_err(|_| FormatError::InvalidRawAmount(format!("negative value {v}")))
    }
}

impl TryFrom<i128> for RawAmount {
    type Error = FormatError;

    fn try_from(v: i128) -> Result<Self, Self::Error> {
        u128::try_from(v)
            .map(Self::from)
            .map_err(|_| FormatError::InvalidRawAmount(format!("negative value {v}")))
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// A raw magnitude paired with the number of its digits that are fractional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaledAmount {
    pub raw: RawAmount,
    pub decimals: DecimalCount,
}

impl ScaledAmount {
    pub fn new(raw: RawAmount, decimals: DecimalCount) -> Self {
        Self { raw, decimals }
    }

    /// Parses a decimal string such as `"12.34"` into its scaled form.
    pub fn from_display(value: &str, decimals: DecimalCount) -> Result<Self, FormatError> {
        Ok(Self {
            raw: parse_units(value, decimals)?,
            decimals,
        })
    }

    pub fn to_display(&self) -> DisplayValue {
        format_units(&self.raw, self.decimals)
    }

    /// Exact conversion to `Decimal`, or `None` when the value does not fit
    /// its 96-bit mantissa and 28-digit scale.
    pub fn to_decimal(&self) -> Option<Decimal> {
        self.to_display().to_decimal()
    }
}

impl fmt::Display for ScaledAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display())
    }
}
