//! Core engine for the tickdeck stock dashboard.
//!
//! # Overview
//!
//! Everything the dashboard needs short of HTTP routing lives here:
//! validated domain types, the data-source contracts, provider adapters
//! for Yahoo Finance and Alpha Vantage, and the headline sentiment
//! scorer.
//!
//! # Modules
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`domain`] | validated tickers, date ranges, price/statement/news models |
//! | [`data_source`] | provider traits, request envelopes, error taxonomy |
//! | [`adapters`] | Yahoo chart, Alpha Vantage fundamentals, Yahoo RSS news |
//! | [`registry`] | provider wiring from runtime configuration |
//! | [`http_client`] | transport abstraction with mock and reqwest implementations |
//! | [`sentiment`] | lexicon polarity scoring for headlines |
//!
//! # Quick start
//!
//! ```
//! use tickdeck_core::{DateRange, PriceHistoryRequest, ProviderSet, Symbol};
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let providers = ProviderSet::mock();
//! let request = PriceHistoryRequest::new(
//!     Symbol::parse("AAPL")?,
//!     DateRange::parse("2024-01-02", "2024-06-28")?,
//! );
//! let history = providers.market().price_history(request);
//! # drop(history);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod registry;
pub mod sentiment;

pub use data_source::{
    FundamentalsSource, MarketDataSource, NewsSource, PriceHistoryRequest, ProviderError,
    ProviderErrorKind, StatementKind,
};
pub use domain::{
    parse_iso_date, DateRange, NewsFeed, NewsItem, PriceColumn, PriceTable, StatementTable, Symbol,
    UtcDateTime,
};
pub use error::ValidationError;
pub use registry::{ProviderSet, ProviderSetBuilder, RegistryError};
