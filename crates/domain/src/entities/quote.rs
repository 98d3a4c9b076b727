use crate::entities::price_feed::{PairId, PriceFeed};
use crate::error::FormatError;
use crate::value_objects::DisplayValue;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monotonic identifier of a user-triggered price request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRequest {
    pub id: RequestId,
    pub pair_id: PairId,
}

impl PriceRequest {
    pub fn new(id: RequestId, pair_id: PairId) -> Self {
        Self { id, pair_id }
    }
}

/// Formatted answer to a [`PriceRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub request_id: RequestId,
    pub pair_id: PairId,
    pub round: U256,
    pub time: U256,
    pub value: DisplayValue,
}

impl PriceQuote {
    pub fn from_feed(request: &PriceRequest, feed: &PriceFeed) -> Result<Self, FormatError> {
        Ok(Self {
            request_id: request.id,
            pair_id: request.pair_id,
            round: feed.round,
            time: feed.time,
            value: feed.display_price()?,
        })
    }
}

/// Latest-request-wins view over quotes that may complete out of order.
///
/// A quote is shown only if no newer request has already produced one, and the
/// board reports loading while the newest issued request is unsettled.
#[derive(Debug, Clone, Default)]
pub struct QuoteBoard {
    latest: Option<PriceQuote>,
    newest_issued: Option<RequestId>,
    newest_settled: Option<RequestId>,
}

impl QuoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `request` has been sent.
    pub fn issue(&mut self, request: &PriceRequest) {
        self.newest_issued = self.newest_issued.max(Some(request.id));
    }

    /// Offers a completed quote. Returns `false` if it is older than the one shown.
    pub fn accept(&mut self, quote: PriceQuote) -> bool {
        self.settle(quote.request_id);
        let newer = self
            .latest
            .as_ref()
            .is_none_or(|current| quote.request_id > current.request_id);
        if newer {
            self.latest = Some(quote);
        }
        newer
    }

    /// Records that `request` ended without a quote.
    pub fn fail(&mut self, request: &PriceRequest) {
        self.settle(request.id);
    }

    pub fn latest(&self) -> Option<&PriceQuote> {
        self.latest.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.newest_issued > self.newest_settled
    }

    fn settle(&mut self, id: RequestId) {
        self.newest_settled = self.newest_settled.max(Some(id));
    }
}
