use crate::error::FormatError;
use crate::value_objects::{DecimalCount, DisplayValue, RawAmount, ScaledAmount};
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index selecting one price feed (an asset pair) on the oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairId(pub u64);

impl PairId {
    pub fn as_u256(&self) -> U256 {
        U256::from(self.0)
    }
}

impl From<u64> for PairId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

impl FromStr for PairId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price record returned by the oracle's `getPrice`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFeed {
    pub round: U256,
    pub decimals: U256,
    /// Update time as reported by the oracle.
    pub time: U256,
    pub price: U256,
}

impl PriceFeed {
    pub fn scaled_price(&self) -> Result<ScaledAmount, FormatError> {
        Ok(ScaledAmount::new(
            RawAmount::from(self.price),
            DecimalCount::try_from(self.decimals)?,
        ))
    }

    /// Price formatted with the feed's own decimal count.
    pub fn display_price(&self) -> Result<DisplayValue, FormatError> {
        Ok(self.scaled_price()?.to_display())
    }
}
