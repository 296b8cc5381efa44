use std::fmt::Write as _;

use time::Date;

use tickdeck_core::{DateRange, PriceTable, StatementKind, Symbol};
use tickdeck_report::{resolve_close_column, NewsSummary, PriceReport, ReshapedStatement};

use crate::chart;

/// What the fundamentals section renders for one statement: the pivoted
/// table, or an inline message when that fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementSection {
    Table(ReshapedStatement),
    Message(String),
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:2rem auto;max-width:60rem;padding:0 1rem;color:#111}\
h1{font-size:1.6rem}h2{margin-top:2rem;border-bottom:1px solid #d1d5db;padding-bottom:.25rem}\
table{border-collapse:collapse;margin:.75rem 0;width:100%}\
th,td{border:1px solid #d1d5db;padding:.3rem .5rem;text-align:right;font-variant-numeric:tabular-nums}\
th:first-child,td:first-child{text-align:left}\
form{display:flex;gap:1rem;flex-wrap:wrap;align-items:end;margin:1rem 0}\
label{display:flex;flex-direction:column;font-size:.85rem;gap:.25rem}\
.error{color:#b91c1c}.notice{color:#374151}\
article{border:1px solid #e5e7eb;border-radius:.375rem;padding:.5rem .75rem;margin:.5rem 0}\
article h4{margin:.25rem 0}.published{color:#6b7280;font-size:.85rem}";

/// Landing page shown before a ticker is entered.
pub fn prompt_page() -> String {
    page(&format!(
        "{}<p class=\"notice\">Please enter a ticker to fetch data.</p>",
        query_form("", "", "")
    ))
}

/// Full-page error shown when the render cannot proceed.
pub fn error_page(message: &str) -> String {
    page(&format!(
        "{}<p class=\"error\">{}</p>",
        query_form("", "", ""),
        escape_html(message)
    ))
}

/// The dashboard itself: chart, price movements, statements, news.
pub fn dashboard_page(
    symbol: &Symbol,
    range: DateRange,
    table: &PriceTable,
    report: &PriceReport,
    statements: &[(StatementKind, StatementSection)],
    news: &Result<NewsSummary, String>,
) -> String {
    let mut body = query_form(
        symbol.as_str(),
        &range.start.to_string(),
        &range.end.to_string(),
    );

    body.push_str(&pricing_section(table, report));
    body.push_str(&fundamentals_section(statements));
    body.push_str(&news_section(symbol, news));

    page(&body)
}

fn page(body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\
<title>Stock Dashboard</title><style>{STYLE}</style></head>\
<body><h1>Stock Dashboard</h1>{body}</body></html>"
    )
}

fn query_form(ticker: &str, start: &str, end: &str) -> String {
    format!(
        "<form method=\"get\" action=\"/\">\
<label>Ticker<input name=\"ticker\" value=\"{}\" placeholder=\"AAPL\"></label>\
<label>Start date<input name=\"start\" type=\"date\" value=\"{}\"></label>\
<label>End date<input name=\"end\" type=\"date\" value=\"{}\"></label>\
<button type=\"submit\">Fetch</button></form>",
        escape_html(ticker),
        escape_html(start),
        escape_html(end)
    )
}

fn pricing_section(table: &PriceTable, report: &PriceReport) -> String {
    let series: Vec<(Date, f64)> = resolve_close_column(table)
        .map(|column| {
            table
                .dates
                .iter()
                .zip(column.values.iter())
                .filter_map(|(date, value)| value.map(|close| (*date, close)))
                .collect()
        })
        .unwrap_or_default();

    let mut section = String::from("<section><h2>Pricing Data</h2>");
    section.push_str(&chart::price_chart_svg(&series));

    section.push_str("<h3>Price Movements</h3>");
    let _ = write!(
        section,
        "<table><thead><tr><th>Date</th><th>{}</th><th>% Change</th></tr></thead><tbody>",
        escape_html(&report.close_column)
    );
    for row in &report.rows {
        let _ = write!(
            section,
            "<tr><td>{}</td><td>{:.2}</td><td>{:.6}</td></tr>",
            row.date, row.close, row.pct_change
        );
    }
    section.push_str("</tbody></table>");

    match report.annual_return_pct {
        Some(annual) => {
            let _ = write!(section, "<p>Annual Return is : {annual:.2} %</p>");
        }
        None => section.push_str("<p>Annual Return is : insufficient data</p>"),
    }

    section.push_str("</section>");
    section
}

fn fundamentals_section(statements: &[(StatementKind, StatementSection)]) -> String {
    let mut section = String::from("<section><h2>Fundamental Data</h2>");

    for (kind, content) in statements {
        let _ = write!(section, "<h3>{}</h3>", kind.title());
        match content {
            StatementSection::Table(statement) => {
                section.push_str(&statement_table(statement));
            }
            StatementSection::Message(message) => {
                let _ = write!(section, "<p class=\"error\">{}</p>", escape_html(message));
            }
        }
    }

    section.push_str("</section>");
    section
}

fn statement_table(statement: &ReshapedStatement) -> String {
    let mut html = String::from("<table><thead><tr><th></th>");
    for period in &statement.periods {
        let _ = write!(html, "<th>{}</th>", escape_html(period));
    }
    html.push_str("</tr></thead><tbody>");

    for line in &statement.lines {
        let _ = write!(html, "<tr><th>{}</th>", escape_html(&line.label));
        for value in &line.values {
            let _ = write!(html, "<td>{}</td>", escape_html(value));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

fn news_section(symbol: &Symbol, news: &Result<NewsSummary, String>) -> String {
    let mut section = String::from("<section><h2>Top 10 News</h2>");
    let _ = write!(section, "<h3>News of {}</h3>", escape_html(symbol.as_str()));

    match news {
        Err(message) => {
            let _ = write!(section, "<p class=\"error\">{}</p>", escape_html(message));
        }
        Ok(summary) if summary.is_empty() => {
            let _ = write!(
                section,
                "<p class=\"notice\">No news found for {}.</p>",
                escape_html(symbol.as_str())
            );
        }
        Ok(summary) => {
            for (index, item) in summary.items.iter().enumerate() {
                let _ = write!(section, "<article><h4>News {}</h4>", index + 1);

                let title = escape_html(&item.title);
                match item.link.as_deref().filter(|link| is_web_link(link)) {
                    Some(link) => {
                        let _ = write!(
                            section,
                            "<p class=\"headline\"><a href=\"{}\">{}</a></p>",
                            escape_html(link),
                            title
                        );
                    }
                    None => {
                        let _ = write!(section, "<p class=\"headline\">{title}</p>");
                    }
                }

                if let Some(published) = &item.published {
                    let _ = write!(
                        section,
                        "<p class=\"published\">{}</p>",
                        escape_html(&published.format_rfc3339())
                    );
                }

                let _ = write!(section, "<p>Title Sentiment {}</p>", item.sentiment_title);
                let _ = write!(section, "<p>{}</p>", escape_html(&item.summary));
                let _ = write!(section, "<p>News Sentiment {}</p>", item.sentiment_summary);
                section.push_str("</article>");
            }
        }
    }

    section.push_str("</section>");
    section
}

// Only plain web links become anchors; anything else renders as text.
fn is_web_link(link: &str) -> bool {
    link.starts_with("https://") || link.starts_with("http://")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
