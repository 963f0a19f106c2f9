//! Lenient deserializers for upstream payloads.
//!
//! Several upstream DTOs carry prices as JSON strings (`"187.44"`) while
//! others use numbers. The helpers here accept both. Chart timestamps are
//! parsed into `chrono` values so ordering never relies on string layout.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Wire format of intraday sample timestamps.
pub const INTRADAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wire format of daily sample dates.
pub const DAILY_FORMAT: &str = "%Y-%m-%d";

fn value_to_f64<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<f64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(num) => num
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom("number out of f64 range")),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| E::custom(format!("expected a numeric string, got `{s}`"))),
        other => Err(E::custom(format!("expected number or string, got {other}"))),
    }
}

/// Deserialize an `f64` from either a JSON number or a numeric string.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    value_to_f64(value)?.ok_or_else(|| serde::de::Error::custom("missing numeric value"))
}

/// Like [`number_or_string`] but maps `null`, `""` and absent fields to `None`.
///
/// Use together with `#[serde(default)]`.
pub fn opt_number_or_string<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    value_to_f64(value)
}

/// Parse `"YYYY-MM-DD HH:MM:SS"` (a `T` separator is accepted too).
pub fn intraday_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, INTRADAY_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| serde::de::Error::custom(format!("bad intraday timestamp `{s}`: {e}")))
}

/// Parse `"YYYY-MM-DD"`. Trailing time components are ignored.
pub fn daily_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let head = s.get(..10).unwrap_or(&s);
    NaiveDate::parse_from_str(head, DAILY_FORMAT)
        .map_err(|e| serde::de::Error::custom(format!("bad daily date `{s}`: {e}")))
}

/// Deserialize an optional `bool` from `true`/`false` or `"true"`/`"false"`.
pub fn opt_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Bool(b) => Ok(Some(b)),
        serde_json::Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            "" => Ok(None),
            _ => Err(serde::de::Error::custom(format!("expected a boolean, got `{s}`"))),
        },
        other => Err(serde::de::Error::custom(format!("expected a boolean, got {other}"))),
    }
}

/// Deserialize an optional string that the upstream sometimes sends as a number.
pub fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(num) => Ok(Some(num.to_string())),
        other => Err(serde::de::Error::custom(format!("expected a string, got {other}"))),
    }
}

/// Deserialize each element of an upstream array on its own.
///
/// Rows that fail to parse are logged and dropped, so one malformed sample
/// never costs the rest of the series.
pub fn lenient_rows<T: DeserializeOwned>(rows: Vec<serde_json::Value>, what: &str) -> Vec<T> {
    let total = rows.len();
    let parsed: Vec<T> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(series = what, index, error = %err, "skipping malformed row");
                None
            }
        })
        .collect();
    if parsed.len() < total {
        tracing::debug!(series = what, kept = parsed.len(), total, "dropped malformed rows");
    }
    parsed
}
