//! Provider adapters behind the data-source traits.
//!
//! | Adapter | Upstream | Serves |
//! |---------|----------|--------|
//! | [`YahooAdapter`] | Yahoo Finance v8 chart API | daily OHLCV price history |
//! | [`AlphaVantageAdapter`] | Alpha Vantage query API | annual financial statements |
//! | [`StockNewsAdapter`] | Yahoo Finance headline RSS | scored news items |
//!
//! Every adapter defaults to deterministic mock data and switches to its
//! real upstream when handed a non-mock
//! [`HttpClient`](crate::http_client::HttpClient).

mod alphavantage;
mod rss;
mod stocknews;
mod yahoo;

pub use alphavantage::AlphaVantageAdapter;
pub use stocknews::StockNewsAdapter;
pub use yahoo::YahooAdapter;
