pub mod price_feed;
pub mod quote;

// Re-export for easier access
pub use price_feed::{PairId, PriceFeed};
pub use quote::{PriceQuote, PriceRequest, QuoteBoard, RequestId};
