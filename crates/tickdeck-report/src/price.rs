use time::Date;

use tickdeck_core::{PriceColumn, PriceTable, Symbol};

use crate::error::ReportError;

/// Sessions per year used to annualize the mean daily return.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// One row of the price movements table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceMovementRow {
    pub date: Date,
    pub close: f64,
    /// Fractional change against the previous close, not a percentage.
    pub pct_change: f64,
}

/// The derived price movements report.
///
/// `annual_return_pct` is `None` when the close series is too short to
/// derive any change, which the dashboard renders as "insufficient data".
#[derive(Debug, Clone, PartialEq)]
pub struct PriceReport {
    pub close_column: String,
    pub rows: Vec<PriceMovementRow>,
    pub annual_return_pct: Option<f64>,
}

/// Pick the close series to chart and derive returns from.
///
/// Adjusted closes are preferred over raw closes, exact names over
/// suffixed ones such as `Close_AAPL`. When nothing close-like exists,
/// the first column holding any value is used.
pub fn resolve_close_column(table: &PriceTable) -> Option<&PriceColumn> {
    let exact = |name: &str| table.columns.iter().find(|c| c.name == name);
    let prefixed = |prefix: &str| table.columns.iter().find(|c| c.name.starts_with(prefix));

    exact("Adj Close")
        .or_else(|| exact("Adjusted Close"))
        .or_else(|| prefixed("Adj Close"))
        .or_else(|| prefixed("Adjusted Close"))
        .or_else(|| exact("Close"))
        .or_else(|| prefixed("Close"))
        .or_else(|| {
            table
                .columns
                .iter()
                .find(|c| c.values.iter().any(Option::is_some))
        })
}

/// Fractional period-over-period change between consecutive closes.
///
/// The first observation has no predecessor and is dropped, so the result
/// is one shorter than the input.
pub fn percent_change(closes: &[f64]) -> Vec<f64> {
    closes
        .windows(2)
        .map(|pair| pair[1] / pair[0] - 1.0)
        .collect()
}

/// Annualize a series of daily fractional changes into a percentage.
///
/// # Errors
///
/// Returns [`ReportError::InsufficientData`] for an empty series.
pub fn annualized_return(pct_changes: &[f64]) -> Result<f64, ReportError> {
    if pct_changes.is_empty() {
        return Err(ReportError::InsufficientData);
    }
    let mean = pct_changes.iter().sum::<f64>() / pct_changes.len() as f64;
    Ok(mean * TRADING_DAYS_PER_YEAR * 100.0)
}

/// Derive the price movements report from a fetched price table.
///
/// Changes are computed over consecutive present closes, so a gap in the
/// series pairs each value with the nearest earlier one.
///
/// # Errors
///
/// Returns [`ReportError::NoData`] when the table is empty or no column
/// holds a single value.
pub fn build_price_report(symbol: &Symbol, table: &PriceTable) -> Result<PriceReport, ReportError> {
    if table.is_empty() {
        return Err(ReportError::NoData {
            symbol: symbol.to_string(),
        });
    }

    let column = resolve_close_column(table).ok_or_else(|| ReportError::NoData {
        symbol: symbol.to_string(),
    })?;

    let observed: Vec<(Date, f64)> = table
        .dates
        .iter()
        .zip(column.values.iter())
        .filter_map(|(date, value)| value.map(|close| (*date, close)))
        .collect();

    let closes: Vec<f64> = observed.iter().map(|(_, close)| *close).collect();
    let pct = percent_change(&closes);

    let rows = observed
        .iter()
        .skip(1)
        .zip(pct.iter())
        .map(|(&(date, close), &pct_change)| PriceMovementRow {
            date,
            close,
            pct_change,
        })
        .collect();

    let annual_return_pct = annualized_return(&pct).ok();

    Ok(PriceReport {
        close_column: column.name.clone(),
        rows,
        annual_return_pct,
    })
}
