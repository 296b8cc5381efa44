use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use time::Date;

use crate::data_source::{MarketDataSource, PriceHistoryRequest, ProviderError};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{DateRange, PriceColumn, PriceTable, Symbol, UtcDateTime, ValidationError};

const CHART_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance market-data adapter supporting both real API calls and
/// mock mode.
///
/// The v8 chart endpoint is unauthenticated; one GET per dashboard render.
#[derive(Clone)]
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
    timeout_ms: u64,
}

impl Default for YahooAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
            timeout_ms: 10_000,
        }
    }
}

impl YahooAdapter {
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

impl MarketDataSource for YahooAdapter {
    fn price_history<'a>(
        &'a self,
        req: PriceHistoryRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PriceTable, ProviderError>> + Send + 'a>> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_history(&req).await
            } else {
                self.fetch_fake_history(&req)
            }
        })
    }
}

// Real API implementation
impl YahooAdapter {
    async fn fetch_real_history(&self, req: &PriceHistoryRequest) -> Result<PriceTable, ProviderError> {
        let endpoint = format!(
            "{}/{}?period1={}&period2={}&interval=1d&events=div%2Csplits&includeAdjustedClose=true",
            CHART_BASE,
            urlencoding::encode(req.symbol.as_str()),
            req.range.start_unix(),
            req.range.end_unix_exclusive(),
        );

        let request = HttpRequest::get(&endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| ProviderError::fetch(format!("yahoo transport error: {}", e.message())))?;

        if !response.is_success() {
            return Err(ProviderError::fetch(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        let chart: YahooChartResponse = serde_json::from_str(&response.body)
            .map_err(|e| ProviderError::decode(format!("failed to parse yahoo chart: {}", e)))?;

        if let Some(error) = &chart.chart.error {
            return Err(ProviderError::fetch(format!(
                "yahoo chart API error: {}: {}",
                error.code.as_deref().unwrap_or("unknown"),
                error.description.as_deref().unwrap_or("no description"),
            )));
        }

        let Some(result) = chart.chart.result.as_ref().and_then(|r| r.first()) else {
            return Ok(PriceTable::empty());
        };

        let Some(timestamps) = result.timestamp.as_ref() else {
            // Yahoo answers with a meta-only result when the window holds no sessions
            tracing::warn!(symbol = %req.symbol, "yahoo chart returned no timestamps");
            return Ok(PriceTable::empty());
        };

        let quote = result
            .indicators
            .quote
            .first()
            .ok_or_else(|| ProviderError::decode("no quote block in yahoo chart"))?;
        let adjclose = result
            .indicators
            .adjclose
            .as_ref()
            .and_then(|blocks| blocks.first());

        let mut dates: Vec<Date> = Vec::with_capacity(timestamps.len());
        let mut open = Vec::with_capacity(timestamps.len());
        let mut high = Vec::with_capacity(timestamps.len());
        let mut low = Vec::with_capacity(timestamps.len());
        let mut close = Vec::with_capacity(timestamps.len());
        let mut adj = adjclose.map(|_| Vec::with_capacity(timestamps.len()));
        let mut volume = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            // Rows missing any OHLC value are skipped
            let (Some(Some(o)), Some(Some(h)), Some(Some(l)), Some(Some(c))) = (
                quote.open.get(i),
                quote.high.get(i),
                quote.low.get(i),
                quote.close.get(i),
            ) else {
                tracing::warn!(symbol = %req.symbol, index = i, "skipping yahoo row with missing ohlc");
                continue;
            };

            let date = UtcDateTime::from_unix_seconds(ts)
                .map_err(validation_to_error)?
                .date();

            dates.push(date);
            open.push(Some(*o));
            high.push(Some(*h));
            low.push(Some(*l));
            close.push(Some(*c));
            if let Some(adj) = adj.as_mut() {
                let value = adjclose
                    .and_then(|block| block.adjclose.get(i))
                    .copied()
                    .flatten();
                adj.push(value);
            }
            volume.push(quote.volume.get(i).copied().flatten().map(|v| v as f64));
        }

        if dates.is_empty() {
            return Ok(PriceTable::empty());
        }

        let mut columns = vec![
            PriceColumn::new("Open", open).map_err(validation_to_error)?,
            PriceColumn::new("High", high).map_err(validation_to_error)?,
            PriceColumn::new("Low", low).map_err(validation_to_error)?,
            PriceColumn::new("Close", close).map_err(validation_to_error)?,
        ];
        if let Some(adj) = adj {
            columns.push(PriceColumn::new("Adj Close", adj).map_err(validation_to_error)?);
        }
        columns.push(PriceColumn::new("Volume", volume).map_err(validation_to_error)?);

        PriceTable::new(dates, columns).map_err(validation_to_error)
    }
}

// Mock data (deterministic per symbol and range)
impl YahooAdapter {
    fn fetch_fake_history(&self, req: &PriceHistoryRequest) -> Result<PriceTable, ProviderError> {
        let seed = symbol_seed(&req.symbol);
        let sessions = weekdays_in(req.range);

        let base = 40.0 + (seed % 600) as f64 / 10.0;
        let mut prev_close = base;

        let mut open = Vec::with_capacity(sessions.len());
        let mut high = Vec::with_capacity(sessions.len());
        let mut low = Vec::with_capacity(sessions.len());
        let mut close = Vec::with_capacity(sessions.len());
        let mut adj = Vec::with_capacity(sessions.len());
        let mut volume = Vec::with_capacity(sessions.len());

        for index in 0..sessions.len() {
            let drift = ((seed.wrapping_mul(31).wrapping_add(index as u64 * 17)) % 21) as f64 - 10.0;
            let day_close = (prev_close * (1.0 + drift / 1_000.0)).max(1.0);
            let day_open = prev_close;
            let day_high = day_open.max(day_close) + 0.9;
            let day_low = (day_open.min(day_close) - 0.7).max(0.5);

            open.push(Some(day_open));
            high.push(Some(day_high));
            low.push(Some(day_low));
            close.push(Some(day_close));
            adj.push(Some(day_close * 0.985));
            volume.push(Some(
                (1_000_000 + (seed.wrapping_add(index as u64 * 7_919)) % 5_000_000) as f64,
            ));

            prev_close = day_close;
        }

        let columns = vec![
            PriceColumn::new("Open", open).map_err(validation_to_error)?,
            PriceColumn::new("High", high).map_err(validation_to_error)?,
            PriceColumn::new("Low", low).map_err(validation_to_error)?,
            PriceColumn::new("Close", close).map_err(validation_to_error)?,
            PriceColumn::new("Adj Close", adj).map_err(validation_to_error)?,
            PriceColumn::new("Volume", volume).map_err(validation_to_error)?,
        ];

        PriceTable::new(sessions, columns).map_err(validation_to_error)
    }
}

// Yahoo Finance chart response structures
#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Option<Vec<YahooChartResult>>,
    #[serde(default)]
    error: Option<YahooChartError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuoteBlock>,
    #[serde(default)]
    adjclose: Option<Vec<YahooAdjCloseBlock>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<i64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooAdjCloseBlock {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

pub(crate) fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

fn weekdays_in(range: DateRange) -> Vec<Date> {
    let mut sessions = Vec::new();
    let mut day = range.start;
    while day < range.end {
        let weekday = day.weekday().number_days_from_monday();
        if weekday < 5 {
            sessions.push(day);
        }
        match day.next_day() {
            Some(next) => day = next,
            None => break,
        }
    }
    sessions
}

fn validation_to_error(error: ValidationError) -> ProviderError {
    ProviderError::decode(error.to_string())
}
