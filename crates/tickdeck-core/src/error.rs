use thiserror::Error;

/// Validation and contract errors exposed by `tickdeck-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ticker cannot be empty")]
    EmptyTicker,
    #[error("ticker length {len} exceeds max {max}")]
    TickerTooLong { len: usize, max: usize },
    #[error("ticker contains invalid character '{ch}' at index {index}")]
    TickerInvalidChar { ch: char, index: usize },
    #[error("ticker must contain at least one letter or digit")]
    TickerNoAlphanumeric,

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },
    #[error("timestamp out of range: '{value}'")]
    TimestampOutOfRange { value: String },
    #[error("date must be YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("date range start {start} is after end {end}")]
    InvalidDateRange { start: time::Date, end: time::Date },

    #[error("price column name cannot be empty")]
    EmptyColumnName,
    #[error("duplicate price column '{name}'")]
    DuplicateColumn { name: String },
    #[error("price column '{name}' has {len} cells, expected {expected}")]
    ColumnLengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },
    #[error("price dates must be strictly ascending")]
    DatesNotSorted,
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("statement field label cannot be empty (row {row})")]
    EmptyStatementLabel { row: usize },
    #[error("statement report {report} has {len} values, expected {expected}")]
    RaggedStatementReport {
        report: usize,
        len: usize,
        expected: usize,
    },

    #[error("news title cannot be empty")]
    EmptyNewsTitle,
    #[error("sentiment score '{field}' must be within [-1, 1]")]
    SentimentOutOfRange { field: &'static str },
}
