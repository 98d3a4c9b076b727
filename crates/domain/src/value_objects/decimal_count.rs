use crate::error::FormatError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of low-order digits of a raw amount that form the fractional part.
///
/// Bounded by `u8::MAX`: a `uint256` has at most 78 digits, so a larger scale
/// only adds leading zeros, and an unbounded one lets a bad oracle response
/// force an arbitrarily large allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecimalCount(u8);

impl DecimalCount {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u8::MAX);

    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    fn out_of_range(v: impl fmt::Display) -> FormatError {
        FormatError::InvalidDecimalCount(format!(
            "decimal count {v} exceeds {}",
            u8::MAX
        ))
    }
}

impl From<u8> for DecimalCount {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

impl TryFrom<u32> for DecimalCount {
    type Error = FormatError;

    fn try_from(v: u32) -> Result<Self, Self::Error> {
        u8::try_from(v).map(Self).map_err(|_| Self::out_of_range(v))
    }
}

impl TryFrom<i64> for DecimalCount {
    type Error = FormatError;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        if v < 0 {
            return Err(FormatError::InvalidDecimalCount(format!(
                "negative decimal count {v}"
            )));
        }
        u8::try_from(v).map(Self).map_err(|_| Self::out_of_range(v))
    }
}

/// Oracle contracts report decimals as `uint256`.
impl TryFrom<U256> for DecimalCount {
    type Error = FormatError;

    fn try_from(v: U256) -> Result<Self, Self::Error> {
        if v > U256::from(u8::MAX) {
            return Err(Self::out_of_range(v));
        }
        Ok(Self(v.low_u32() as u8))
    }
}

impl fmt::Display for DecimalCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
