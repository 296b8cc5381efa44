//! Behavior-driven tests for the report builder.
//!
//! These tests verify HOW provider tables become display-ready reports:
//! close-column resolution, percent-change derivation, annualized return,
//! statement reshaping, and news truncation.

use tickdeck_tests::{
    annualized_return, build_price_report, parse_iso_date, percent_change, reshape,
    resolve_close_column, summarize, Date, NewsFeed, NewsItem, PriceColumn, PriceTable,
    ReportError, StatementTable, Symbol, MAX_HEADLINES,
};

fn symbol(raw: &str) -> Symbol {
    Symbol::parse(raw).expect("valid symbol")
}

fn dates(count: usize) -> Vec<Date> {
    (0..count)
        .map(|index| {
            parse_iso_date(&format!("2024-03-{:02}", index + 1)).expect("valid date")
        })
        .collect()
}

fn close_table(closes: &[f64]) -> PriceTable {
    let values = closes.iter().map(|close| Some(*close)).collect();
    PriceTable::new(
        dates(closes.len()),
        vec![PriceColumn::new("Close", values).expect("valid column")],
    )
    .expect("valid table")
}

// =============================================================================
// Price Series Normalizer: percent change and annualized return
// =============================================================================

#[test]
fn when_table_has_n_rows_percent_change_has_n_minus_one() {
    // Given: A price table with several sessions
    let table = close_table(&[100.0, 101.0, 103.0, 99.5, 102.0]);

    // When: The report is derived
    let report = build_price_report(&symbol("AAPL"), &table).expect("report builds");

    // Then: The first session has no predecessor and is dropped
    assert_eq!(report.rows.len(), table.row_count() - 1);
}

#[test]
fn when_returns_are_annualized_the_mean_is_scaled_by_252() {
    // Given: A series of daily fractional changes
    let pct = [0.01, -0.005, 0.02, 0.003];
    let mean: f64 = pct.iter().sum::<f64>() / pct.len() as f64;

    // When: The series is annualized
    let annual = annualized_return(&pct).expect("non-empty series");

    // Then: The value is mean x 252 x 100, exact to float tolerance
    assert!((annual - mean * 252.0 * 100.0).abs() < 1e-9);
}

#[test]
fn when_table_has_one_row_the_report_says_insufficient_data_instead_of_crashing() {
    // Given: A single-session table
    let table = close_table(&[100.0]);

    // When: The report is derived
    let report = build_price_report(&symbol("AAPL"), &table).expect("report builds");

    // Then: There is no annual return, only the marker the UI renders
    assert!(report.rows.is_empty());
    assert_eq!(report.annual_return_pct, None);
}

#[test]
fn when_the_price_table_is_empty_the_report_halts_with_no_data() {
    // Given: An empty primary fetch
    let table = PriceTable::empty();

    // When: The report is derived
    let result = build_price_report(&symbol("TSLA"), &table);

    // Then: The render is halted with a NoData error naming the ticker
    assert_eq!(
        result.expect_err("empty table must halt"),
        ReportError::NoData {
            symbol: "TSLA".to_string()
        }
    );
}

#[test]
fn when_percent_change_divides_consecutive_closes_values_are_fractional() {
    // Given: Closes that double then halve
    let pct = percent_change(&[100.0, 200.0, 100.0]);

    // Then: Changes are fractions, not percentages
    assert_eq!(pct.len(), 2);
    assert!((pct[0] - 1.0).abs() < 1e-12);
    assert!((pct[1] + 0.5).abs() < 1e-12);
}

// =============================================================================
// Price Series Normalizer: close-column resolution
// =============================================================================

#[test]
fn when_only_a_suffixed_close_exists_the_resolver_selects_it() {
    // Given: A provider response with a composite column name
    let table = PriceTable::new(
        dates(1),
        vec![PriceColumn::new("Close_AAPL", vec![Some(187.0)]).expect("valid column")],
    )
    .expect("valid table");

    // When: The close column is resolved
    let resolved = resolve_close_column(&table).expect("column resolves");

    // Then: The suffixed column is used
    assert_eq!(resolved.name, "Close_AAPL");
}

#[test]
fn when_adjusted_and_raw_closes_exist_the_adjusted_one_wins() {
    // Given: Both close flavors side by side
    let table = PriceTable::new(
        dates(1),
        vec![
            PriceColumn::new("Close", vec![Some(187.0)]).expect("valid column"),
            PriceColumn::new("Adj Close", vec![Some(185.2)]).expect("valid column"),
        ],
    )
    .expect("valid table");

    // When: The close column is resolved
    let resolved = resolve_close_column(&table).expect("column resolves");

    // Then: The adjusted series is preferred
    assert_eq!(resolved.name, "Adj Close");
}

// =============================================================================
// Financial Statement Reshaper
// =============================================================================

#[test]
fn when_a_statement_is_reshaped_the_header_row_becomes_the_columns() {
    // Given: A provider table of [meta0, meta1, header, v1, v2] fields
    let table = StatementTable::new(
        vec![
            "symbol".to_string(),
            "reportedCurrency".to_string(),
            "fiscalDateEnding".to_string(),
            "totalRevenue".to_string(),
            "netIncome".to_string(),
        ],
        vec![
            vec![
                "AAPL".to_string(),
                "USD".to_string(),
                "2023-09-30".to_string(),
                "383285000000".to_string(),
                "96995000000".to_string(),
            ],
            vec![
                "AAPL".to_string(),
                "USD".to_string(),
                "2022-09-30".to_string(),
                "394328000000".to_string(),
                "99803000000".to_string(),
            ],
        ],
    )
    .expect("valid statement table");

    // When: The table is pivoted for display
    let reshaped = reshape(&table).expect("reshape succeeds");

    // Then: Columns are the header values and rows are the line items
    assert_eq!(reshaped.periods, vec!["2023-09-30", "2022-09-30"]);
    let labels: Vec<&str> = reshaped
        .lines
        .iter()
        .map(|line| line.label.as_str())
        .collect();
    assert_eq!(labels, vec!["totalRevenue", "netIncome"]);
    assert_eq!(
        reshaped.lines[0].values,
        vec!["383285000000", "394328000000"]
    );
}

#[test]
fn when_the_statement_is_empty_the_reshaper_fails_gracefully() {
    // Given: A provider that returned nothing
    let table = StatementTable::empty();

    // When: The table is pivoted
    let result = reshape(&table);

    // Then: A graceful error drives the section's empty-state message
    assert_eq!(result, Err(ReportError::EmptyStatement));
}

// =============================================================================
// News Summarizer
// =============================================================================

fn feed_of(count: usize) -> NewsFeed {
    let items = (0..count)
        .map(|index| {
            NewsItem::new(
                None,
                format!("Headline {index}"),
                format!("Summary {index}"),
                None,
                0.1,
                -0.1,
            )
            .expect("valid item")
        })
        .collect();
    NewsFeed::new(symbol("AAPL"), items)
}

#[test]
fn when_the_feed_has_fifteen_items_exactly_ten_are_shown() {
    // Given: A busy ticker with fifteen headlines
    let feed = feed_of(15);

    // When: The feed is summarized
    let summary = summarize(&feed);

    // Then: Only the first ten survive, in feed order
    assert_eq!(summary.items.len(), MAX_HEADLINES);
    assert_eq!(summary.items[0].title, "Headline 0");
    assert_eq!(summary.items[9].title, "Headline 9");
}

#[test]
fn when_the_feed_has_three_items_all_three_are_shown() {
    // Given: A quiet ticker with three headlines
    let summary = summarize(&feed_of(3));

    // Then: All of them render
    assert_eq!(summary.items.len(), 3);
}

#[test]
fn when_the_feed_is_empty_the_summary_drives_the_empty_state() {
    // Given: A ticker without coverage
    let summary = summarize(&feed_of(0));

    // Then: The summary is empty and carries the ticker for the message
    assert!(summary.is_empty());
    assert_eq!(summary.ticker, "AAPL");
}
