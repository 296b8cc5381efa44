use std::sync::Arc;

use thiserror::Error;

use crate::adapters::{AlphaVantageAdapter, StockNewsAdapter, YahooAdapter};
use crate::data_source::{FundamentalsSource, MarketDataSource, NewsSource};
use crate::http_client::{HttpClient, ReqwestHttpClient};

/// Environment variable consulted for the Alpha Vantage API key.
pub const API_KEY_ENV: &str = "TICKDECK_ALPHAVANTAGE_API_KEY";
/// Fallback variable, matching the name other Alpha Vantage tools use.
pub const API_KEY_ENV_FALLBACK: &str = "ALPHAVANTAGE_API_KEY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error(
        "no Alpha Vantage API key; pass --alphavantage-key or set TICKDECK_ALPHAVANTAGE_API_KEY"
    )]
    MissingApiKey,
}

/// The three data sources a dashboard render draws from.
#[derive(Clone)]
pub struct ProviderSet {
    market: Arc<dyn MarketDataSource>,
    fundamentals: Arc<dyn FundamentalsSource>,
    news: Arc<dyn NewsSource>,
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet").finish_non_exhaustive()
    }
}

impl ProviderSet {
    pub fn new(
        market: Arc<dyn MarketDataSource>,
        fundamentals: Arc<dyn FundamentalsSource>,
        news: Arc<dyn NewsSource>,
    ) -> Self {
        Self {
            market,
            fundamentals,
            news,
        }
    }

    /// A fully offline set serving deterministic mock data.
    pub fn mock() -> Self {
        Self::new(
            Arc::new(YahooAdapter::default()),
            Arc::new(AlphaVantageAdapter::default()),
            Arc::new(StockNewsAdapter::default()),
        )
    }

    pub fn market(&self) -> &dyn MarketDataSource {
        self.market.as_ref()
    }

    pub fn fundamentals(&self) -> &dyn FundamentalsSource {
        self.fundamentals.as_ref()
    }

    pub fn news(&self) -> &dyn NewsSource {
        self.news.as_ref()
    }
}

/// Assembles a [`ProviderSet`] from runtime configuration.
///
/// Real mode wires every adapter to one shared reqwest transport and
/// requires an Alpha Vantage key, taken from the builder or from
/// [`API_KEY_ENV`] / [`API_KEY_ENV_FALLBACK`].
#[derive(Debug, Clone, Default)]
pub struct ProviderSetBuilder {
    mock: bool,
    timeout_ms: Option<u64>,
    alphavantage_key: Option<String>,
}

impl ProviderSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock(mut self, mock: bool) -> Self {
        self.mock = mock;
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn alphavantage_key(mut self, key: impl Into<String>) -> Self {
        self.alphavantage_key = Some(key.into());
        self
    }

    pub fn build(self) -> Result<ProviderSet, RegistryError> {
        if self.mock {
            return Ok(ProviderSet::mock());
        }

        let key = self
            .alphavantage_key
            .or_else(env_key)
            .ok_or(RegistryError::MissingApiKey)?;

        let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());

        let mut market = YahooAdapter::with_http_client(http_client.clone());
        let mut fundamentals = AlphaVantageAdapter::with_http_client(http_client.clone(), key);
        let mut news = StockNewsAdapter::with_http_client(http_client);

        if let Some(timeout_ms) = self.timeout_ms {
            market = market.with_timeout_ms(timeout_ms);
            fundamentals = fundamentals.with_timeout_ms(timeout_ms);
            news = news.with_timeout_ms(timeout_ms);
        }

        Ok(ProviderSet::new(
            Arc::new(market),
            Arc::new(fundamentals),
            Arc::new(news),
        ))
    }
}

fn env_key() -> Option<String> {
    [API_KEY_ENV, API_KEY_ENV_FALLBACK].iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .filter(|value| !value.trim().is_empty())
    })
}
