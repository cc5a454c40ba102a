//! Request timestamps: RFC 3339, or a local date-time with no offset which is
//! taken as UTC (`2023-07-27T17:59:14.141`).

use chrono::{DateTime, NaiveDateTime, ParseError, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|with_offset| with_offset.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT)
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(raw.trim()).map_err(|e| de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}
