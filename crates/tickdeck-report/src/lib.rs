//! Derived dashboard tables.
//!
//! Turns raw provider payloads into the three things the dashboard
//! renders: the price movements table with its annualized return, the
//! pivoted financial statements, and the capped news summary.

pub mod error;
pub mod news;
pub mod price;
pub mod statement;

pub use error::ReportError;
pub use news::{summarize, NewsSummary, MAX_HEADLINES};
pub use price::{
    annualized_return, build_price_report, percent_change, resolve_close_column, PriceMovementRow,
    PriceReport, TRADING_DAYS_PER_YEAR,
};
pub use statement::{reshape, ReshapedStatement, StatementLine};
