//! ABI bindings for the oracle's `getPrice(uint256)` view.
//!
//! The return value is the static `priceFeed` struct, four `uint256` words.
//! The domain keeps `primitive_types::U256`, so decoded words are converted
//! at this boundary.

use crate::error::ProtocolError;
use alloy_sol_types::{SolCall, sol};
use oracle_domain::entities::{PairId, PriceFeed};

pub use alloy_primitives::Address;

sol! {
    interface ISupraSValueFeed {
        struct priceFeed {
            uint256 round;
            uint256 decimals;
            uint256 time;
            uint256 price;
        }

        function getPrice(uint256 _priceIndex) external view returns (priceFeed memory);
    }
}

pub use ISupraSValueFeed::{getPriceCall, priceFeed};

/// Parses a `0x`-prefixed (or bare) 40-digit hex address. Checksums are not
/// enforced.
pub fn parse_address(s: &str) -> Result<Address, ProtocolError> {
    s.parse::<Address>()
        .map_err(|e| ProtocolError::InvalidAddress(format!("{s:?}: {e}")))
}

/// Calldata for `getPrice(pair_id)`.
pub fn encode_get_price(pair_id: PairId) -> Vec<u8> {
    getPriceCall {
        _priceIndex: alloy_primitives::U256::from(pair_id.0),
    }
    .abi_encode()
}

/// Decodes the `priceFeed` struct returned by `getPrice`.
pub fn decode_price_feed(data: &[u8]) -> Result<PriceFeed, ProtocolError> {
    let feed = getPriceCall::abi_decode_returns(data)
        .map_err(|e| ProtocolError::Decode(format!("getPrice returned {} bytes: {e}", data.len())))?;
    Ok(PriceFeed {
        round: to_domain_u256(feed.round),
        decimals: to_domain_u256(feed.decimals),
        time: to_domain_u256(feed.time),
        price: to_domain_u256(feed.price),
    })
}

fn to_domain_u256(v: alloy_primitives::U256) -> primitive_types::U256 {
    primitive_types::U256::from_big_endian(&v.to_be_bytes::<32>())
}
