use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::ValidationError;

/// RFC3339 timestamp guaranteed to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcDateTime(OffsetDateTime);

impl UtcDateTime {
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::parse(input, &Rfc3339).map_err(|_| {
            ValidationError::TimestampNotUtc {
                value: input.to_owned(),
            }
        })?;

        Self::from_offset_datetime(parsed).map_err(|_| ValidationError::TimestampNotUtc {
            value: input.to_owned(),
        })
    }

    /// Parse an RFC2822 timestamp (RSS `pubDate`), converting to UTC.
    pub fn parse_rfc2822(input: &str) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::parse(input, &Rfc2822).map_err(|_| {
            ValidationError::TimestampNotUtc {
                value: input.to_owned(),
            }
        })?;

        Ok(Self(parsed.to_offset(UtcOffset::UTC)))
    }

    /// Interpret unix seconds as a UTC instant (Yahoo chart timestamps).
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, ValidationError> {
        let parsed = OffsetDateTime::from_unix_timestamp(seconds).map_err(|_| {
            ValidationError::TimestampOutOfRange {
                value: seconds.to_string(),
            }
        })?;

        Ok(Self(parsed))
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Result<Self, ValidationError> {
        if value.offset() != UtcOffset::UTC {
            return Err(ValidationError::TimestampNotUtc {
                value: value
                    .format(&Rfc3339)
                    .unwrap_or_else(|_| String::from("<unformattable>")),
            });
        }

        Ok(Self(value))
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    /// Calendar date of the instant (UTC).
    pub fn date(self) -> Date {
        self.0.date()
    }

    pub fn unix_seconds(self) -> i64 {
        self.0.unix_timestamp()
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .expect("UtcDateTime must be RFC3339 formattable")
    }
}

impl Display for UtcDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for UtcDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for UtcDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_utc_timestamp() {
        let parsed = UtcDateTime::parse("2024-01-01T00:00:00Z").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn rejects_non_utc_timestamp() {
        let err = UtcDateTime::parse("2024-01-01T01:00:00+01:00").expect_err("must fail");
        assert!(matches!(err, ValidationError::TimestampNotUtc { .. }));
    }

    #[test]
    fn parses_rfc2822_and_converts_offset_to_utc() {
        let parsed =
            UtcDateTime::parse_rfc2822("Mon, 30 Oct 2023 10:30:00 -0400").expect("must parse");
        assert_eq!(parsed.format_rfc3339(), "2023-10-30T14:30:00Z");
    }

    #[test]
    fn round_trips_unix_seconds() {
        let parsed = UtcDateTime::from_unix_seconds(1_700_000_000).expect("must parse");
        assert_eq!(parsed.unix_seconds(), 1_700_000_000);
    }

    #[test]
    fn rejects_out_of_range_unix_seconds() {
        let err = UtcDateTime::from_unix_seconds(i64::MAX).expect_err("must fail");
        assert!(matches!(err, ValidationError::TimestampOutOfRange { .. }));
    }
}
