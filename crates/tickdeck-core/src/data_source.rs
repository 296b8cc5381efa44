//! Provider contracts and request/response types.
//!
//! The dashboard consumes three independent upstreams, one trait each:
//!
//! | Trait | Request | Response | Description |
//! |-------|---------|----------|-------------|
//! | [`MarketDataSource`] | [`PriceHistoryRequest`] | [`PriceTable`] | Daily OHLC history |
//! | [`FundamentalsSource`] | [`Symbol`] + [`StatementKind`] | [`StatementTable`] | Annual statements |
//! | [`NewsSource`] | [`Symbol`] | [`NewsFeed`] | Headlines with sentiment |
//!
//! Adapters never retry and never cache; each dashboard render performs one
//! call per section and surfaces failures inline.
//!
//! # Example
//!
//! ```rust,ignore
//! use tickdeck_core::{MarketDataSource, PriceHistoryRequest, YahooAdapter};
//!
//! async fn fetch(adapter: &YahooAdapter, req: PriceHistoryRequest) -> Result<(), ProviderError> {
//!     let table = adapter.price_history(req).await?;
//!     println!("{} rows", table.row_count());
//!     Ok(())
//! }
//! ```

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::{DateRange, NewsFeed, PriceTable, StatementTable, Symbol};

/// Adapter-level error classification.
///
/// `Empty` is a provider that answered with nothing for the query; `Fetch`
/// covers transport and upstream-status failures; `Decode` covers malformed
/// bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Empty,
    Fetch,
    Decode,
    InvalidRequest,
}

/// Structured provider error surfaced as an inline dashboard message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderError {
    kind: ProviderErrorKind,
    message: String,
}

impl ProviderError {
    pub fn empty(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Empty,
            message: message.into(),
        }
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Fetch,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ProviderErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Stable code string for logs.
    pub const fn code(&self) -> &'static str {
        match self.kind {
            ProviderErrorKind::Empty => "provider.empty",
            ProviderErrorKind::Fetch => "provider.fetch",
            ProviderErrorKind::Decode => "provider.decode",
            ProviderErrorKind::InvalidRequest => "provider.invalid_request",
        }
    }
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ProviderError {}

/// Which of the three annual statements to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    BalanceSheet,
    IncomeStatement,
    CashFlow,
}

impl StatementKind {
    pub const ALL: [Self; 3] = [Self::BalanceSheet, Self::IncomeStatement, Self::CashFlow];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BalanceSheet => "balance_sheet",
            Self::IncomeStatement => "income_statement",
            Self::CashFlow => "cash_flow",
        }
    }

    /// Section heading as shown on the dashboard.
    pub const fn title(self) -> &'static str {
        match self {
            Self::BalanceSheet => "Balance Sheet",
            Self::IncomeStatement => "Income Statement",
            Self::CashFlow => "Cash Flow Statement",
        }
    }
}

impl Display for StatementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload for price history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceHistoryRequest {
    pub symbol: Symbol,
    pub range: DateRange,
}

impl PriceHistoryRequest {
    pub fn new(symbol: Symbol, range: DateRange) -> Self {
        Self { symbol, range }
    }
}

/// Daily OHLC history source.
///
/// Implementations must be `Send + Sync`; the provider set shares them
/// across dashboard requests behind `Arc`.
pub trait MarketDataSource: Send + Sync {
    /// Fetch the price table for a ticker over a date window.
    ///
    /// An empty window yields an empty table, not an error; the report
    /// layer decides that an empty primary fetch halts the render.
    fn price_history<'a>(
        &'a self,
        req: PriceHistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceTable, ProviderError>> + Send + 'a>>;
}

/// Annual financial statement source.
pub trait FundamentalsSource: Send + Sync {
    /// Fetch one statement, raw provider orientation (reports x fields).
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] with kind `Empty` when the provider has
    /// no reports for the ticker, `Fetch`/`Decode` otherwise.
    fn statement<'a>(
        &'a self,
        symbol: Symbol,
        kind: StatementKind,
    ) -> Pin<Box<dyn Future<Output = Result<StatementTable, ProviderError>> + Send + 'a>>;
}

/// Headline feed source with sentiment pre-attached.
pub trait NewsSource: Send + Sync {
    /// Fetch the latest headlines in feed order.
    ///
    /// A ticker with no coverage yields an empty feed, not an error.
    fn latest_news<'a>(
        &'a self,
        symbol: Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<NewsFeed, ProviderError>> + Send + 'a>>;
}
