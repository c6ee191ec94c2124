//! Datetime serialization/deserialization helpers.
//!
//! Used with `#[serde(with = "crate::utils::datetime")]`:
//! - Serialization: `DateTime<Utc>` -> RFC3339 string
//! - Deserialization: RFC3339 string or Unix timestamp -> `DateTime<Utc>`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Values above this are taken as milliseconds.
const MILLIS_THRESHOLD: i64 = 100_000_000_000;

/// Serializes `DateTime<Utc>` as an RFC3339 string.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// Deserializes `DateTime<Utc>` from RFC3339 or a Unix timestamp (seconds or milliseconds).
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Text(String),
        Signed(i64),
        Float(f64),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::Text(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        Timestamp::Signed(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
        // JavaScript `Date.now()` values occasionally arrive as floats
        #[allow(clippy::cast_possible_truncation)]
        Timestamp::Float(ts) => parse_unix_timestamp(ts.trunc() as i64)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
    }
}

fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    if ts > MILLIS_THRESHOLD {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
