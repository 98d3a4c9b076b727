use super::contract::SValueFeed;
use crate::error::ProtocolError;
use crate::provider::{OracleProvider, Session};
use oracle_domain::entities::{PairId, PriceQuote, PriceRequest, RequestId};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

/// Turns pair ids into formatted price quotes.
///
/// Every request gets a fresh, increasing [`RequestId`]; pair the quotes with a
/// `QuoteBoard` when several reads may be in flight.
pub struct PriceReader<P> {
    feed: SValueFeed<P>,
    next_request: AtomicU64,
}

impl<P: OracleProvider> PriceReader<P> {
    pub fn new(feed: SValueFeed<P>) -> Self {
        Self {
            feed,
            next_request: AtomicU64::new(1),
        }
    }

    pub fn feed(&self) -> &SValueFeed<P> {
        &self.feed
    }

    /// Connects the underlying provider.
    pub async fn connect(&self) -> Result<Session, ProtocolError> {
        let session = self.feed.provider().connect().await?;
        info!(
            chain_id = session.chain_id,
            accounts = session.accounts.len(),
            "Connected to provider"
        );
        Ok(session)
    }

    pub fn request(&self, pair_id: PairId) -> PriceRequest {
        let id = self.next_request.fetch_add(1, Ordering::Relaxed);
        PriceRequest::new(RequestId(id), pair_id)
    }

    /// Performs `request` and formats the price with the feed's own decimals.
    pub async fn read(&self, request: &PriceRequest) -> Result<PriceQuote, ProtocolError> {
        let feed = self
            .feed
            .get_price(request.pair_id)
            .await
            .inspect_err(|e| {
                warn!(request = %request.id, pair_id = %request.pair_id, error = %e, "Price read failed")
            })?;
        let quote = PriceQuote::from_feed(request, &feed)?;
        info!(
            request = %quote.request_id,
            pair_id = %quote.pair_id,
            price = %quote.value,
            round = %quote.round,
            "Price quote"
        );
        Ok(quote)
    }

    /// Issues a new request for `pair_id` and reads it.
    pub async fn quote(&self, pair_id: PairId) -> Result<PriceQuote, ProtocolError> {
        let request = self.request(pair_id);
        self.read(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockProvider, price_feed_response};
    use alloy_primitives::address;
    use oracle_domain::entities::QuoteBoard;

    fn reader(provider: MockProvider) -> PriceReader<MockProvider> {
        PriceReader::new(SValueFeed::new(
            provider,
            address!("00000000000000000000000000000000deadbeef"),
        ))
    }

    #[test]
    fn test_request_ids_increase() {
        let r = reader(MockProvider::returning(Vec::new()));
        let a = r.request(PairId(1));
        let b = r.request(PairId(1));
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn test_quote_formats_with_feed_decimals() {
        let r = reader(MockProvider::returning(price_feed_response(
            42,
            4,
            1_700_000_000,
            123_456,
        )));
        let quote = r.quote(PairId(5)).await.unwrap();
        assert_eq!(quote.pair_id, PairId(5));
        assert_eq!(quote.value.as_str(), "12.3456");
        assert_eq!(r.feed().provider().call_count(), 1);
    }

    #[tokio::test]
    async fn test_quote_beyond_u64() {
        let r = reader(MockProvider::returning(price_feed_response(
            1,
            18,
            0,
            100_000_000_000_000_000_000,
        )));
        let quote = r.quote(PairId(0)).await.unwrap();
        assert_eq!(quote.value.as_str(), "100.000000000000000000");
    }

    #[tokio::test]
    async fn test_quote_surfaces_provider_error() {
        let r = reader(MockProvider::reverting("execution reverted"));
        assert!(matches!(
            r.quote(PairId(0)).await,
            Err(ProtocolError::Rpc { .. })
        ));
    }

    #[tokio::test]
    async fn test_connect() {
        let r = reader(MockProvider::returning(Vec::new()));
        let session = r.connect().await.unwrap();
        assert_eq!(session.chain_id, 31337);
    }

    #[tokio::test]
    async fn test_concurrent_reads_reconcile_on_board() {
        let r = reader(MockProvider::returning(price_feed_response(1, 2, 0, 500)));
        let first = r.request(PairId(1));
        let second = r.request(PairId(2));

        let mut board = QuoteBoard::new();
        board.issue(&first);
        board.issue(&second);

        let (q1, q2) = tokio::join!(r.read(&first), r.read(&second));
        // Deliver out of order.
        assert!(board.accept(q2.unwrap()));
        assert!(!board.accept(q1.unwrap()));
        assert_eq!(board.latest().unwrap().pair_id, PairId(2));
        assert_eq!(board.latest().unwrap().value.as_str(), "5.00");
        assert!(!board.is_loading());
    }
}
