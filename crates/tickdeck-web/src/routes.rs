use axum::extract::{Query, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use tickdeck_core::{
    parse_iso_date, DateRange, PriceHistoryRequest, ProviderSet, StatementKind, Symbol,
    UtcDateTime, ValidationError,
};
use tickdeck_report::{build_price_report, reshape, summarize};

use crate::render::{self, StatementSection};

#[derive(Clone)]
struct AppState {
    providers: ProviderSet,
}

pub fn router(providers: ProviderSet) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { providers })
}

/// Query parameters of the dashboard page. Blank values count as absent
/// because the form always submits every field.
#[derive(Debug, Clone, Deserialize)]
struct DashboardQuery {
    ticker: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Html<String> {
    let request_id = Uuid::new_v4();

    let ticker = query
        .ticker
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let Some(ticker) = ticker else {
        return Html(render::prompt_page());
    };

    let symbol = match Symbol::parse(ticker) {
        Ok(symbol) => symbol,
        Err(error) => {
            tracing::warn!(%request_id, ticker, %error, "rejected ticker input");
            return Html(render::error_page(&format!(
                "Error fetching stock data: {error}"
            )));
        }
    };

    let start = query
        .start
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let end = query.end.as_deref().map(str::trim).filter(|e| !e.is_empty());
    let range = match resolve_range(start, end) {
        Ok(range) => range,
        Err(error) => {
            tracing::warn!(%request_id, %error, "rejected date input");
            return Html(render::error_page(&format!(
                "Error fetching stock data: {error}"
            )));
        }
    };

    tracing::info!(%request_id, symbol = %symbol, range = %range, "rendering dashboard");

    // The primary fetch: a failure or an empty table halts the render
    let request = PriceHistoryRequest::new(symbol.clone(), range);
    let table = match state.providers.market().price_history(request).await {
        Ok(table) => table,
        Err(error) => {
            tracing::warn!(%request_id, %error, "price history fetch failed");
            return Html(render::error_page(&format!(
                "Error fetching stock data: {error}"
            )));
        }
    };

    let report = match build_price_report(&symbol, &table) {
        Ok(report) => report,
        Err(error) => {
            tracing::warn!(%request_id, %error, "price report halted the render");
            return Html(render::error_page(&error.to_string()));
        }
    };

    // Statement and news failures stay inside their own section
    let mut statements = Vec::with_capacity(StatementKind::ALL.len());
    for kind in StatementKind::ALL {
        let section = match state
            .providers
            .fundamentals()
            .statement(symbol.clone(), kind)
            .await
        {
            Ok(raw) => match reshape(&raw) {
                Ok(statement) => StatementSection::Table(statement),
                Err(error) => {
                    tracing::warn!(%request_id, %kind, %error, "statement reshape failed");
                    StatementSection::Message(error.to_string())
                }
            },
            Err(error) => {
                tracing::warn!(%request_id, %kind, %error, "statement fetch failed");
                StatementSection::Message(error.to_string())
            }
        };
        statements.push((kind, section));
    }

    let news = match state.providers.news().latest_news(symbol.clone()).await {
        Ok(feed) => Ok(summarize(&feed)),
        Err(error) => {
            tracing::warn!(%request_id, %error, "news fetch failed");
            Err(error.to_string())
        }
    };

    Html(render::dashboard_page(
        &symbol,
        range,
        &table,
        &report,
        &statements,
        &news,
    ))
}

/// Fill in the date window: a missing end means today, a missing start
/// means the year leading up to the end.
fn resolve_range(start: Option<&str>, end: Option<&str>) -> Result<DateRange, ValidationError> {
    let end_date = match end {
        Some(raw) => parse_iso_date(raw)?,
        None => UtcDateTime::now().date(),
    };
    match start {
        Some(raw) => DateRange::new(parse_iso_date(raw)?, end_date),
        None => Ok(DateRange::year_ending(end_date)),
    }
}
