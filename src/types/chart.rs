#![allow(missing_docs)]
//! Chart types: raw intraday/daily samples and rendering-ready points.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::de;

// ---------------------------------------------------------------------------
// Raw upstream samples
// ---------------------------------------------------------------------------

/// One intraday sample from `GET /historical-chart/{symbol}`.
///
/// The upstream array is ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IntradayBar {
    /// Sample time, wire field `date` (`YYYY-MM-DD HH:MM:SS`).
    #[serde(rename = "date", deserialize_with = "de::intraday_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Close price; `null` or `""` upstream leaves the sample unpriced.
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub close: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub volume: Option<f64>,
}

impl IntradayBar {
    /// A bare sample with only a timestamp and close.
    pub fn new(timestamp: NaiveDateTime, close: f64) -> Self {
        Self {
            timestamp,
            close: Some(close),
            open: None,
            high: None,
            low: None,
            volume: None,
        }
    }

    /// Trading day the sample belongs to.
    pub fn trading_day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

/// One daily session from `GET /historical-price-full/{symbol}`.
///
/// The upstream array is ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBar {
    #[serde(deserialize_with = "de::daily_date")]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub close: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub open: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub high: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub low: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub adj_close: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub change_percent: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub vwap: Option<f64>,
}

impl DailyBar {
    /// A bare session with only a date and close.
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            close: Some(close),
            open: None,
            high: None,
            low: None,
            volume: None,
            adj_close: None,
            change: None,
            change_percent: None,
            vwap: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering-ready output
// ---------------------------------------------------------------------------

/// A single point of an assembled chart.
///
/// `price` is `None` for grid slots that have no sample yet, so the
/// horizontal axis stays stable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub price: Option<f64>,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, price: Option<f64>) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// Price movement over the displayed timeframe.
///
/// Absent fields are omitted when rendering, never shown as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

impl PriceChange {
    /// Whether neither figure could be derived.
    pub fn is_empty(&self) -> bool {
        self.absolute.is_none() && self.percent.is_none()
    }
}
