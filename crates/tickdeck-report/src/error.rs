use thiserror::Error;

/// Failures while deriving dashboard tables from provider payloads.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The primary price fetch came back empty, which halts the render.
    #[error("no price data found for {symbol}")]
    NoData { symbol: String },

    /// Too few observations to derive returns.
    #[error("insufficient data")]
    InsufficientData,

    /// A statement payload had no usable reports.
    #[error("statement has no usable reports")]
    EmptyStatement,
}
