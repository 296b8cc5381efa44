//! # Domain Models
//!
//! Canonical domain types for tickdeck dashboard data.
//!
//! ## Overview
//!
//! This module provides strongly-typed domain models with built-in validation.
//! All models are designed to be:
//!
//! - **Type-safe**: Invalid states are unrepresentable
//! - **Validated**: Construction validates all invariants
//! - **Serializable**: Full serde support for JSON
//!
//! ## Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Validated ticker symbol |
//! | [`DateRange`] | Start/end query window |
//! | [`UtcDateTime`] | UTC timestamp |
//! | [`PriceTable`] | Date-indexed price history with named columns |
//! | [`PriceColumn`] | One named, nullable series of a price table |
//! | [`StatementTable`] | Raw financial statement (reports x fields) |
//! | [`NewsItem`] | Headline with pre-attached sentiment scores |
//! | [`NewsFeed`] | Provider-ordered headlines for one ticker |
//!
//! ## Validation
//!
//! All domain types enforce invariants at construction time:
//!
//! ```rust,ignore
//! use tickdeck_core::{PriceColumn, PriceTable, ValidationError};
//!
//! // Columns must match the date spine row for row
//! let column = PriceColumn::new("Close", vec![Some(187.2)])?;
//! let table = PriceTable::new(dates, vec![column]);
//! assert!(matches!(table, Err(ValidationError::ColumnLengthMismatch { .. })));
//! ```

mod news;
mod price;
mod range;
mod statement;
mod symbol;
mod timestamp;

pub use news::{NewsFeed, NewsItem};
pub use price::{PriceColumn, PriceTable};
pub use range::{parse_iso_date, DateRange};
pub use statement::StatementTable;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
