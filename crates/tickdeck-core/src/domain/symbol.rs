use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

const MAX_TICKER_LEN: usize = 12;

/// Normalized ticker symbol as typed into the dashboard.
///
/// Accepts equities (`AAPL`), class shares (`BRK-B`, `BF.B`) and index
/// tickers with a caret prefix (`^GSPC`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a ticker to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTicker);
        }

        let normalized = trimmed.to_ascii_uppercase();
        let len = normalized.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(ValidationError::TickerTooLong {
                len,
                max: MAX_TICKER_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric()
                || ch == '.'
                || ch == '-'
                || (ch == '^' && index == 0);
            if !valid {
                return Err(ValidationError::TickerInvalidChar { ch, index });
            }
        }

        if !normalized.chars().any(|ch| ch.is_ascii_alphanumeric()) {
            return Err(ValidationError::TickerNoAlphanumeric);
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_ticker() {
        let parsed = Symbol::parse(" aapl ").expect("ticker should parse");
        assert_eq!(parsed.as_str(), "AAPL");
    }

    #[test]
    fn accepts_index_and_class_share_tickers() {
        assert_eq!(Symbol::parse("^gspc").expect("valid").as_str(), "^GSPC");
        assert_eq!(Symbol::parse("brk-b").expect("valid").as_str(), "BRK-B");
        assert_eq!(Symbol::parse("BF.B").expect("valid").as_str(), "BF.B");
    }

    #[test]
    fn rejects_caret_after_first_position() {
        let err = Symbol::parse("GS^PC").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::TickerInvalidChar { ch: '^', index: 2 }
        ));
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = Symbol::parse("AAPL$").expect_err("must fail");
        assert!(matches!(err, ValidationError::TickerInvalidChar { .. }));
    }

    #[test]
    fn rejects_punctuation_only_ticker() {
        let err = Symbol::parse("^").expect_err("must fail");
        assert!(matches!(err, ValidationError::TickerNoAlphanumeric));
    }

    #[test]
    fn rejects_overlong_ticker() {
        let err = Symbol::parse("ABCDEFGHIJKLM").expect_err("must fail");
        assert!(matches!(err, ValidationError::TickerTooLong { len: 13, .. }));
    }
}
