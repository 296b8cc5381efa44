use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::adapters::yahoo::symbol_seed;
use crate::data_source::{FundamentalsSource, ProviderError, StatementKind};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{StatementTable, Symbol, ValidationError};

const QUERY_BASE: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage fundamentals adapter supporting both real API calls and
/// mock mode.
///
/// Serves the three annual financial statements. The free tier answers
/// rate-limit and bad-key conditions with a 200 body carrying a `Note`,
/// `Information`, or `Error Message` key instead of report data.
#[derive(Clone)]
pub struct AlphaVantageAdapter {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    use_real_api: bool,
    timeout_ms: u64,
}

impl Default for AlphaVantageAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            api_key: "demo".to_string(),
            use_real_api: false,
            timeout_ms: 10_000,
        }
    }
}

impl AlphaVantageAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>, api_key: impl Into<String>) -> Self {
        let is_real = !http_client.is_mock();
        Self {
            http_client,
            api_key: api_key.into(),
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

impl FundamentalsSource for AlphaVantageAdapter {
    fn statement<'a>(
        &'a self,
        symbol: Symbol,
        kind: StatementKind,
    ) -> Pin<Box<dyn Future<Output = Result<StatementTable, ProviderError>> + Send + 'a>> {
        Box::pin(async move {
            if self.is_real_client() {
                self.fetch_real_statement(&symbol, kind).await
            } else {
                self.fetch_fake_statement(&symbol, kind)
            }
        })
    }
}

// Real API implementation
impl AlphaVantageAdapter {
    async fn fetch_real_statement(
        &self,
        symbol: &Symbol,
        kind: StatementKind,
    ) -> Result<StatementTable, ProviderError> {
        let endpoint = format!(
            "{}?function={}&symbol={}&apikey={}",
            QUERY_BASE,
            query_function(kind),
            urlencoding::encode(symbol.as_str()),
            urlencoding::encode(&self.api_key),
        );

        let request = HttpRequest::get(&endpoint)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| {
                ProviderError::fetch(format!("alphavantage transport error: {}", e.message()))
            })?;

        if !response.is_success() {
            return Err(ProviderError::fetch(format!(
                "alphavantage returned status {}",
                response.status
            )));
        }

        let envelope: AlphaVantageEnvelope = serde_json::from_str(&response.body).map_err(|e| {
            ProviderError::decode(format!("failed to parse alphavantage body: {}", e))
        })?;

        // The API signals throttling and bad requests inside a 200 body
        if let Some(note) = advisory_message(&envelope) {
            return Err(ProviderError::fetch(format!(
                "alphavantage rejected the request: {}",
                note
            )));
        }

        if envelope.annual_reports.is_empty() {
            return Err(ProviderError::empty(format!(
                "no annual reports for {} {}",
                symbol, kind
            )));
        }

        build_statement_table(symbol, &envelope.annual_reports)
    }
}

// Mock data (deterministic per symbol and statement kind)
impl AlphaVantageAdapter {
    fn fetch_fake_statement(
        &self,
        symbol: &Symbol,
        kind: StatementKind,
    ) -> Result<StatementTable, ProviderError> {
        let seed = symbol_seed(symbol).wrapping_add(kind as u64 + 1);
        let line_items = fake_line_items(kind);

        let mut fields = vec![
            "symbol".to_string(),
            "reportedCurrency".to_string(),
            "fiscalDateEnding".to_string(),
        ];
        fields.extend(line_items.iter().map(|item| item.to_string()));

        // Newest fiscal year first, matching the real feed
        let mut reports = Vec::with_capacity(FAKE_FISCAL_YEARS.len());
        for (year_index, fiscal_date) in FAKE_FISCAL_YEARS.iter().enumerate() {
            let mut row = vec![
                symbol.to_string(),
                "USD".to_string(),
                fiscal_date.to_string(),
            ];
            for (item_index, _) in line_items.iter().enumerate() {
                let base = 1_000_000_000
                    + seed.wrapping_mul(7).wrapping_add(item_index as u64 * 37_000_000) % 9_000_000_000;
                let scaled = base / (year_index as u64 + 1);
                row.push(scaled.to_string());
            }
            reports.push(row);
        }

        StatementTable::new(fields, reports).map_err(validation_to_error)
    }
}

const FAKE_FISCAL_YEARS: [&str; 3] = ["2023-09-30", "2022-09-30", "2021-09-30"];

fn fake_line_items(kind: StatementKind) -> &'static [&'static str] {
    match kind {
        StatementKind::BalanceSheet => &[
            "cashAndCashEquivalentsAtCarryingValue",
            "longTermDebt",
            "totalAssets",
            "totalLiabilities",
            "totalShareholderEquity",
        ],
        StatementKind::IncomeStatement => &[
            "ebitda",
            "grossProfit",
            "netIncome",
            "operatingIncome",
            "totalRevenue",
        ],
        StatementKind::CashFlow => &[
            "capitalExpenditures",
            "cashflowFromFinancing",
            "cashflowFromInvestment",
            "dividendPayout",
            "operatingCashflow",
        ],
    }
}

fn query_function(kind: StatementKind) -> &'static str {
    match kind {
        StatementKind::BalanceSheet => "BALANCE_SHEET",
        StatementKind::IncomeStatement => "INCOME_STATEMENT",
        StatementKind::CashFlow => "CASH_FLOW",
    }
}

fn advisory_message(envelope: &AlphaVantageEnvelope) -> Option<&str> {
    envelope
        .note
        .as_deref()
        .or(envelope.information.as_deref())
        .or(envelope.error_message.as_deref())
}

/// Flattens annual reports into a field-per-column table.
///
/// Field order is symbol, currency, fiscal date, then the line items of
/// the newest report in sorted order. Reports keep the provider's
/// newest-first order; line items a report lacks render as "None".
fn build_statement_table(
    symbol: &Symbol,
    annual_reports: &[AnnualReport],
) -> Result<StatementTable, ProviderError> {
    let canonical: Vec<&String> = annual_reports[0].line_items.keys().collect();

    let mut fields = vec![
        "symbol".to_string(),
        "reportedCurrency".to_string(),
        "fiscalDateEnding".to_string(),
    ];
    fields.extend(canonical.iter().map(|key| (*key).clone()));

    let mut reports = Vec::with_capacity(annual_reports.len());
    for report in annual_reports {
        let mut row = vec![
            symbol.to_string(),
            report
                .reported_currency
                .clone()
                .unwrap_or_else(|| "None".to_string()),
            report.fiscal_date_ending.clone(),
        ];
        for key in &canonical {
            let cell = report
                .line_items
                .get(*key)
                .map(value_to_cell)
                .unwrap_or_else(|| "None".to_string());
            row.push(cell);
        }
        reports.push(row);
    }

    StatementTable::new(fields, reports).map_err(validation_to_error)
}

fn value_to_cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

fn validation_to_error(error: ValidationError) -> ProviderError {
    ProviderError::decode(error.to_string())
}

// Alpha Vantage response structures
#[derive(Debug, Clone, Deserialize)]
struct AlphaVantageEnvelope {
    #[serde(rename = "Note", default)]
    note: Option<String>,
    #[serde(rename = "Information", default)]
    information: Option<String>,
    #[serde(rename = "Error Message", default)]
    error_message: Option<String>,
    #[serde(rename = "annualReports", default)]
    annual_reports: Vec<AnnualReport>,
}

#[derive(Debug, Clone, Deserialize)]
struct AnnualReport {
    #[serde(rename = "fiscalDateEnding")]
    fiscal_date_ending: String,
    #[serde(rename = "reportedCurrency", default)]
    reported_currency: Option<String>,
    #[serde(flatten)]
    line_items: BTreeMap<String, serde_json::Value>,
}
