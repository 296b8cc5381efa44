use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::adapters::rss;
use crate::adapters::yahoo::symbol_seed;
use crate::data_source::{NewsSource, ProviderError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::sentiment;
use crate::{NewsFeed, NewsItem, Symbol, UtcDateTime, ValidationError};

const FEED_BASE: &str = "https://feeds.finance.yahoo.com/rss/2.0/headline";

/// Yahoo Finance news adapter supporting both real RSS fetches and mock
/// mode.
///
/// Headlines are scored at this boundary so downstream consumers only see
/// ready-to-render sentiment values.
#[derive(Clone)]
pub struct StockNewsAdapter {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
    timeout_ms: u64,
}

impl Default for StockNewsAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
            timeout_ms: 10_000,
        }
    }
}

impl StockNewsAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let is_real = !http_client.is_mock();
        Self {
            http_client,
            use_real_api: is_real,
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn is_real_client(&self) -> bool {
        self.use_real_api
    }
}

impl NewsSource for StockNewsAdapter {
    fn latest_news<'a>(
        &'a self,
        symbol: Symbol,
    ) -> Pin<Box<dyn Future<Output = Result<NewsFeed, ProviderError>> + Send + 'a>> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_news(&symbol).await
            } else {
                self.fetch_fake_news(&symbol)
            }
        })
    }
}

// Real API implementation
impl StockNewsAdapter {
    async fn fetch_real_news(&self, symbol: &Symbol) -> Result<NewsFeed, ProviderError> {
        let endpoint = format!(
            "{}?s={}&region=US&lang=en-US",
            FEED_BASE,
            urlencoding::encode(symbol.as_str()),
        );

        let request = HttpRequest::get(&endpoint)
            .with_header("accept", "application/rss+xml")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ProviderError::fetch(format!("news transport error: {}", e.message())))?;

        if !response.is_success() {
            return Err(ProviderError::fetch(format!(
                "news feed returned status {}",
                response.status
            )));
        }

        let mut items = Vec::new();
        for raw in rss::parse_items(&response.body) {
            let Some(title) = raw.title else {
                tracing::debug!(symbol = %symbol, "skipping news item without a title");
                continue;
            };

            let published = raw.pub_date.as_deref().and_then(parse_pub_date);
            if raw.pub_date.is_some() && published.is_none() {
                tracing::warn!(symbol = %symbol, "unparseable pubDate in news item");
            }

            let summary = raw.description.unwrap_or_default();
            let title_score = sentiment::polarity(&title);
            let summary_score = sentiment::polarity(&summary);

            match NewsItem::new(published, title, summary, raw.link, title_score, summary_score) {
                Ok(item) => items.push(item),
                Err(error) => {
                    tracing::warn!(symbol = %symbol, %error, "dropping invalid news item");
                }
            }
        }

        // An empty feed is an ordinary answer for quiet tickers
        Ok(NewsFeed::new(symbol.clone(), items))
    }
}

/// Parse an RFC 2822 stamp, tolerating the obsolete `GMT` zone name Yahoo
/// feeds have historically used.
fn parse_pub_date(raw: &str) -> Option<UtcDateTime> {
    if let Ok(parsed) = UtcDateTime::parse_rfc2822(raw) {
        return Some(parsed);
    }
    let normalized = raw.strip_suffix(" GMT").map(|head| format!("{head} +0000"))?;
    UtcDateTime::parse_rfc2822(&normalized).ok()
}

// Mock data (deterministic per symbol)
impl StockNewsAdapter {
    fn fetch_fake_news(&self, symbol: &Symbol) -> Result<NewsFeed, ProviderError> {
        let seed = symbol_seed(symbol);
        let offset = (seed % FAKE_HEADLINES.len() as u64) as usize;

        let mut items = Vec::with_capacity(FAKE_HEADLINES.len());
        for index in 0..FAKE_HEADLINES.len() {
            let (title_tail, summary) = FAKE_HEADLINES[(offset + index) % FAKE_HEADLINES.len()];
            let title = format!("{} {}", symbol, title_tail);
            let link = format!(
                "https://finance.yahoo.com/news/{}-{:02}.html",
                symbol.as_str().to_ascii_lowercase(),
                index
            );
            let published =
                UtcDateTime::from_unix_seconds(FAKE_NEWEST_STAMP - index as i64 * 3_600).ok();

            let item = NewsItem::new(
                published,
                title,
                summary,
                Some(link),
                sentiment::polarity(title_tail),
                sentiment::polarity(summary),
            )
            .map_err(validation_to_error)?;
            items.push(item);
        }

        Ok(NewsFeed::new(symbol.clone(), items))
    }
}

// 2024-01-15T12:00:00Z, counted down one hour per item
const FAKE_NEWEST_STAMP: i64 = 1_705_320_000;

const FAKE_HEADLINES: [(&str, &str); 12] = [
    (
        "shares surge to a record close",
        "Momentum builds on strong growth and an upbeat outlook.",
    ),
    (
        "stock extends rally after analyst upgrade",
        "The upgrade points to profit momentum and strong demand.",
    ),
    (
        "issues a warning on weak demand",
        "Guidance flags a decline in orders for the coming quarter.",
    ),
    (
        "faces lawsuit over disclosure practices",
        "Legal fear weighs on the shares in early trading.",
    ),
    (
        "posts a clean profit beat",
        "Results beat estimates on strong services growth.",
    ),
    (
        "shares plunge after a broker downgrade",
        "Analysts cite a margin miss and weak guidance.",
    ),
    (
        "options traders position for a breakout",
        "Volumes soar as the stock nears a record high.",
    ),
    (
        "supplier flags a production decline",
        "A parts warning may weigh on assembly volumes.",
    ),
    (
        "announces dividend increase and buyback",
        "Capital returns draw an upbeat response from holders.",
    ),
    (
        "quarterly revenue arrives in line with estimates",
        "Shares little changed after the report.",
    ),
    (
        "partners report strong order growth",
        "Channel checks point to a demand surge.",
    ),
    (
        "outlook cut amid weak consumer spending",
        "Retail partners report a holiday sales miss.",
    ),
];

fn validation_to_error(error: ValidationError) -> ProviderError {
    ProviderError::decode(error.to_string())
}
