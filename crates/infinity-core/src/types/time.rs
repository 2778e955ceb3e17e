//! Timestamp codec for configuration objects.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Formats accepted for timezone-less timestamps, tried in order.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Format used when encoding.
const ENCODE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A timestamp as carried by configuration objects.
///
/// The management API sends timestamps without a timezone
/// (`2024-03-01T12:30:00.123456`, UTC by convention). Values with an
/// RFC 3339 offset are normalised to UTC, and bare dates (`2024-03-01`) are
/// read as midnight.
///
/// # Example
///
/// ```
/// use infinity_core::InfinityTime;
///
/// let t = InfinityTime::parse("2024-03-01T12:30:00.5").unwrap();
/// assert_eq!(t.to_string(), "2024-03-01T12:30:00.500");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InfinityTime(NaiveDateTime);

impl InfinityTime {
    /// Parse a timestamp in any of the accepted formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string matches none of the accepted formats.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let s = s.trim();

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(with_offset.naive_utc()));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Self(naive));
            }
        }

        if let Some(midnight) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
        {
            return Ok(Self(midnight));
        }

        Err(InvalidInputError::Timestamp {
            value: s.to_string(),
            reason: "expected YYYY-MM-DDTHH:MM:SS[.ffffff]".to_string(),
        }
        .into())
    }

    /// Returns the timestamp as a naive UTC date-time.
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl From<NaiveDateTime> for InfinityTime {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for InfinityTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ENCODE_FORMAT))
    }
}

impl FromStr for InfinityTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for InfinityTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for InfinityTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        InfinityTime::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_microseconds() {
        let t = InfinityTime::parse("2024-03-01T12:30:45.123456").unwrap();
        assert_eq!(t.as_naive().nanosecond(), 123_456_000);
        assert_eq!(t.to_string(), "2024-03-01T12:30:45.123456");
    }

    #[test]
    fn parses_without_fraction() {
        let t = InfinityTime::parse("2024-03-01T12:30:45").unwrap();
        assert_eq!(t.to_string(), "2024-03-01T12:30:45");
    }

    #[test]
    fn parses_space_separator() {
        let t = InfinityTime::parse("2024-03-01 08:00:00").unwrap();
        assert_eq!(t.as_naive().hour(), 8);
    }

    #[test]
    fn normalises_offsets_to_utc() {
        let t = InfinityTime::parse("2024-03-01T12:00:00+02:00").unwrap();
        assert_eq!(t.to_string(), "2024-03-01T10:00:00");
    }

    #[test]
    fn bare_date_is_midnight() {
        let t = InfinityTime::parse("2025-12-31").unwrap();
        assert_eq!(t.as_naive().day(), 31);
        assert_eq!(t.to_string(), "2025-12-31T00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(InfinityTime::parse("yesterday").is_err());
    }

    #[test]
    fn serde_as_string() {
        let t: InfinityTime = serde_json::from_str(r#""2024-03-01T12:30:45""#).unwrap();
        assert_eq!(serde_json::to_string(&t).unwrap(), r#""2024-03-01T12:30:45""#);
    }
}
