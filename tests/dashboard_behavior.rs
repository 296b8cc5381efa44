//! Behavior-driven tests for the full dashboard data pipeline.
//!
//! Each test walks the same path a dashboard render takes: fetch from the
//! offline provider set, then derive the display artifacts (price report,
//! reshaped statements, news summary) and check what the page would show.

use tickdeck_tests::{
    build_price_report, reshape, summarize, DateRange, PriceHistoryRequest, ProviderSet,
    ReportError, StatementKind, Symbol, MAX_HEADLINES,
};

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

fn window(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).expect("valid range")
}

// =============================================================================
// Pricing section
// =============================================================================

#[tokio::test]
async fn when_a_month_is_rendered_the_price_report_covers_every_later_session() {
    // Given: The offline provider set and a January window
    let providers = ProviderSet::mock();
    let request = PriceHistoryRequest::new(symbol("AAPL"), window("2024-01-02", "2024-01-31"));

    // When: History is fetched and the report is derived
    let table = providers
        .market()
        .price_history(request)
        .await
        .expect("mock history should never fail");
    let report = build_price_report(&symbol("AAPL"), &table).expect("report builds");

    // Then: Every session after the first gets a movement row
    assert_eq!(report.rows.len(), table.row_count() - 1);
    assert_eq!(report.rows[0].date, table.dates[1]);

    // And: The adjusted series drives the table when the provider sends one
    assert_eq!(report.close_column, "Adj Close");

    // And: A multi-session window always yields an annualized figure
    let annual = report.annual_return_pct.expect("annual return present");
    assert!(annual.is_finite());
}

#[tokio::test]
async fn when_the_window_has_no_sessions_the_render_halts_with_no_data() {
    // Given: A weekend-only window
    let providers = ProviderSet::mock();
    let request = PriceHistoryRequest::new(symbol("AAPL"), window("2024-01-06", "2024-01-07"));

    // When: The empty fetch reaches the report builder
    let table = providers
        .market()
        .price_history(request)
        .await
        .expect("mock history should never fail");
    let result = build_price_report(&symbol("AAPL"), &table);

    // Then: The whole page halts on the pricing error, naming the ticker
    assert_eq!(
        result.expect_err("empty history must halt the render"),
        ReportError::NoData {
            symbol: "AAPL".to_string()
        }
    );
}

// =============================================================================
// Fundamentals section
// =============================================================================

#[tokio::test]
async fn when_statements_are_rendered_fiscal_periods_become_column_headers() {
    // Given: The offline provider set
    let providers = ProviderSet::mock();

    for kind in StatementKind::ALL {
        // When: One statement is fetched and reshaped for display
        let table = providers
            .fundamentals()
            .statement(symbol("AAPL"), kind)
            .await
            .expect("mock statement should never fail");
        let reshaped = reshape(&table).expect("reshape succeeds");

        // Then: The fiscal period of each report heads a column
        assert_eq!(
            reshaped.periods,
            vec!["2023-09-30", "2022-09-30", "2021-09-30"],
            "{kind} column headers"
        );

        // And: The metadata fields are gone, leaving only line items
        assert!(!reshaped.lines.is_empty(), "{kind} must have line items");
        assert!(
            reshaped.lines.iter().all(|line| line.values.len() == 3),
            "{kind} lines must cover every period"
        );
        assert!(
            reshaped.lines.iter().all(|line| {
                line.label != "symbol"
                    && line.label != "reportedCurrency"
                    && line.label != "fiscalDateEnding"
            }),
            "{kind} must not render metadata as line items"
        );
    }
}

// =============================================================================
// News section
// =============================================================================

#[tokio::test]
async fn when_news_is_rendered_the_busiest_feed_is_capped_at_ten_headlines() {
    // Given: The offline provider set, whose feed carries twelve stories
    let providers = ProviderSet::mock();

    // When: The feed is fetched and summarized for the page
    let feed = providers
        .news()
        .latest_news(symbol("AAPL"))
        .await
        .expect("mock news should never fail");
    let summary = summarize(&feed);

    // Then: Only the newest ten make the page, in feed order
    assert_eq!(feed.items.len(), 12);
    assert_eq!(summary.items.len(), MAX_HEADLINES);
    assert_eq!(summary.items[0].title, feed.items[0].title);
    assert_eq!(summary.ticker, "AAPL");

    // And: Every rendered headline names the ticker it was fetched for
    assert!(summary
        .items
        .iter()
        .all(|item| item.title.starts_with("AAPL ")));
}

// =============================================================================
// Whole-page coherence
// =============================================================================

#[tokio::test]
async fn when_one_render_fetches_everything_the_sections_agree_on_the_ticker() {
    // Given: One ticker and the default-style year window
    let providers = ProviderSet::mock();
    let ticker = symbol("MSFT");
    let range = window("2023-06-28", "2024-06-28");

    // When: All three sections fetch, as one dashboard render does
    let table = providers
        .market()
        .price_history(PriceHistoryRequest::new(ticker.clone(), range))
        .await
        .expect("mock history should never fail");
    let statement = providers
        .fundamentals()
        .statement(ticker.clone(), StatementKind::BalanceSheet)
        .await
        .expect("mock statement should never fail");
    let feed = providers
        .news()
        .latest_news(ticker.clone())
        .await
        .expect("mock news should never fail");

    // Then: Each section reflects the same ticker
    let report = build_price_report(&ticker, &table).expect("report builds");
    assert!(report.rows.len() > 200, "a year holds over 200 sessions");
    assert!(statement.reports.iter().all(|r| r[0] == "MSFT"));
    assert!(summarize(&feed)
        .items
        .iter()
        .all(|item| item.title.starts_with("MSFT ")));
}
