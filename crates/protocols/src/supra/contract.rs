use crate::abi::{self, Address};
use crate::error::ProtocolError;
use crate::provider::OracleProvider;
use oracle_domain::entities::{PairId, PriceFeed};
use tracing::debug;

/// Read-only binding to an oracle consumer contract.
pub struct SValueFeed<P> {
    provider: P,
    address: Address,
}

impl<P: OracleProvider> SValueFeed<P> {
    pub fn new(provider: P, address: Address) -> Self {
        Self { provider, address }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Reads the price record for `pair_id`.
    ///
    /// Price and decimals come from the same response, so they always belong
    /// to the same round.
    pub async fn get_price(&self, pair_id: PairId) -> Result<PriceFeed, ProtocolError> {
        debug!(pair_id = %pair_id, contract = %self.address, "Calling getPrice");
        let data = abi::encode_get_price(pair_id);
        let output = self.provider.call(&self.address, &data).await?;
        let feed = abi::decode_price_feed(&output)?;
        debug!(
            pair_id = %pair_id,
            round = %feed.round,
            decimals = %feed.decimals,
            "Decoded price feed"
        );
        Ok(feed)
    }
}
