//! Order record model
//!
//! Only the fields the queries look at are typed. Everything else in a record
//! is kept in `extra` and written back out untouched.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::error::TimestampError;

/// Naive (offset-free) layouts tried after RFC 3339, all read as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A single purchase record
///
/// `price`, `created_at` and `customer` are held as raw JSON so that odd
/// shapes only fail the query that reads them. A key that is present with
/// `null` stays `Some(Value::Null)` and is written back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub currency: String,
    /// Decimal price, normally encoded as a string (e.g. `"2.96"`)
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    /// ISO-8601 creation time, e.g. `2016-01-17T17:02:25.660Z`
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub customer: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrap any present value, `null` included; absent keys fall back to `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Order {
    /// Parse `price` as a number
    ///
    /// Accepts a numeric string (surrounding whitespace ignored) or a bare
    /// JSON number. Returns `None` when the field is missing or unparseable.
    pub fn price_value(&self) -> Option<f64> {
        match self.price.as_ref()? {
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// True if any shipping address field equals `needle` exactly
    ///
    /// A customer or address that is not a JSON object never matches.
    pub fn ships_to(&self, needle: &str) -> bool {
        self.customer
            .as_ref()
            .and_then(|c| c.get("shipping_address"))
            .and_then(Value::as_object)
            .is_some_and(|address| address.values().any(|v| v.as_str() == Some(needle)))
    }

    /// Parse `created_at` into a comparable timestamp
    pub fn created_at_timestamp(&self) -> Result<DateTime<FixedOffset>, TimestampError> {
        let raw = match &self.created_at {
            None | Some(Value::Null) => {
                return Err(TimestampError::Missing {
                    id: self.id.clone(),
                })
            }
            Some(Value::String(raw)) => raw,
            Some(other) => {
                return Err(TimestampError::NotText {
                    id: self.id.clone(),
                    value: other.to_string(),
                })
            }
        };
        parse_timestamp(raw).map_err(|source| TimestampError::Invalid {
            id: self.id.clone(),
            value: raw.clone(),
            source,
        })
    }
}

/// Parse an ISO-8601 timestamp
///
/// A trailing `Z` is rewritten to `+00:00`. RFC 3339 is tried first (`T` or
/// space separator), then the naive layouts in `NAIVE_FORMATS`, then a bare
/// `YYYY-MM-DD` date at midnight. Values without any offset are read as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    let normalized = match raw.strip_suffix('Z') {
        Some(head) => format!("{head}+00:00"),
        None => raw.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized).or_else(|offset_err| {
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc().fixed_offset())
            .ok_or(offset_err)
    })
}
