use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::{Date, Duration};

use crate::ValidationError;

/// Parse a dashboard date input in `YYYY-MM-DD` form.
pub fn parse_iso_date(input: &str) -> Result<Date, ValidationError> {
    let format = time::format_description::parse("[year]-[month]-[day]")
        .expect("static date format must parse");
    Date::parse(input.trim(), &format).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

/// Inclusive start / exclusive end window for a price history query.
///
/// The end day itself is excluded from results, matching the downloader
/// semantics the dashboard wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Result<Self, ValidationError> {
        if start > end {
            return Err(ValidationError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Self::new(parse_iso_date(start)?, parse_iso_date(end)?)
    }

    /// Default window: one year ending on the given day.
    pub fn year_ending(end: Date) -> Self {
        let start = end.checked_sub(Duration::days(365)).unwrap_or(Date::MIN);
        Self { start, end }
    }

    pub fn start_unix(&self) -> i64 {
        self.start.midnight().assume_utc().unix_timestamp()
    }

    pub fn end_unix_exclusive(&self) -> i64 {
        self.end.midnight().assume_utc().unix_timestamp()
    }

    pub fn whole_days(&self) -> i64 {
        (self.end - self.start).whole_days()
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
