//! Lenient timestamp parsing for snapshot documents.
//!
//! Documents written by other tools carry ISO 8601 strings that are not
//! always full RFC 3339 timestamps. Parsing tries, in order: an RFC 3339
//! timestamp with offset, a local date-time read as UTC, and a bare date
//! read as midnight UTC. Blank strings count as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Deserializes an optional ISO 8601 timestamp.
pub(super) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}")))
}

/// Parses an ISO 8601 timestamp, date-time, or date.
fn parse(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    value
        .parse::<DateTime<Utc>>()
        .ok()
        .or_else(|| value.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
        .or_else(|| {
            value
                .parse::<NaiveDate>()
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}
