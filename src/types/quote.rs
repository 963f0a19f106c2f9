#![allow(missing_docs)]
//! Quote types: full stock quote, Finnhub quote, and the price-change table.

use serde::{Deserialize, Serialize};

use crate::types::de;
use crate::types::enums::Timeframe;

// ---------------------------------------------------------------------------
// Full stock quote
// ---------------------------------------------------------------------------

/// Full quote from `GET /quote/{symbol}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub changes_percentage: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub day_low: Option<f64>,
    #[serde(default)]
    pub day_high: Option<f64>,
    #[serde(default)]
    pub year_high: Option<f64>,
    #[serde(default)]
    pub year_low: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub price_avg50: Option<f64>,
    #[serde(default)]
    pub price_avg200: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub avg_volume: Option<f64>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    #[serde(default)]
    pub eps: Option<f64>,
    #[serde(default)]
    pub pe: Option<f64>,
    #[serde(default)]
    pub earnings_announcement: Option<String>,
    #[serde(default)]
    pub shares_outstanding: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

// ---------------------------------------------------------------------------
// Finnhub quote
// ---------------------------------------------------------------------------

/// Raw quote from `GET /finnhub/quote/{symbol}`, with Finnhub's one-letter keys.
#[derive(Debug, Clone, Deserialize)]
pub struct FinnhubQuote {
    /// Current price.
    pub c: f64,
    /// Change.
    #[serde(default)]
    pub d: Option<f64>,
    /// Percent change.
    #[serde(default)]
    pub dp: Option<f64>,
    /// High price of the day.
    #[serde(default)]
    pub h: Option<f64>,
    /// Low price of the day.
    #[serde(default)]
    pub l: Option<f64>,
    /// Open price of the day.
    #[serde(default)]
    pub o: Option<f64>,
    /// Previous close price.
    #[serde(default)]
    pub pc: Option<f64>,
}

/// Current quote with descriptive field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub current_price: f64,
    pub change: Option<f64>,
    pub percent_change: Option<f64>,
    pub high_price_of_day: Option<f64>,
    pub low_price_of_day: Option<f64>,
    pub open_price_of_day: Option<f64>,
    pub previous_close_price: Option<f64>,
}

impl From<FinnhubQuote> for Quote {
    fn from(raw: FinnhubQuote) -> Self {
        Self {
            current_price: raw.c,
            change: raw.d,
            percent_change: raw.dp,
            high_price_of_day: raw.h,
            low_price_of_day: raw.l,
            open_price_of_day: raw.o,
            previous_close_price: raw.pc,
        }
    }
}

// ---------------------------------------------------------------------------
// Price-change table
// ---------------------------------------------------------------------------

/// Percent change per period from `GET /stock-price-change/{symbol}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PriceChangeTable {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(rename = "1D", default, deserialize_with = "de::opt_number_or_string")]
    pub one_day: Option<f64>,
    #[serde(rename = "5D", default, deserialize_with = "de::opt_number_or_string")]
    pub five_days: Option<f64>,
    #[serde(rename = "1M", default, deserialize_with = "de::opt_number_or_string")]
    pub one_month: Option<f64>,
    #[serde(rename = "3M", default, deserialize_with = "de::opt_number_or_string")]
    pub three_months: Option<f64>,
    #[serde(rename = "6M", default, deserialize_with = "de::opt_number_or_string")]
    pub six_months: Option<f64>,
    #[serde(rename = "ytd", default, deserialize_with = "de::opt_number_or_string")]
    pub year_to_date: Option<f64>,
    #[serde(rename = "1Y", default, deserialize_with = "de::opt_number_or_string")]
    pub one_year: Option<f64>,
    #[serde(rename = "3Y", default, deserialize_with = "de::opt_number_or_string")]
    pub three_years: Option<f64>,
    #[serde(rename = "5Y", default, deserialize_with = "de::opt_number_or_string")]
    pub five_years: Option<f64>,
    #[serde(rename = "10Y", default, deserialize_with = "de::opt_number_or_string")]
    pub ten_years: Option<f64>,
    #[serde(rename = "max", default, deserialize_with = "de::opt_number_or_string")]
    pub max: Option<f64>,
}

impl PriceChangeTable {
    /// Look up a period by its wire key (`"1D"`, `"ytd"`, `"10Y"`, ...).
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "1D" => self.one_day,
            "5D" => self.five_days,
            "1M" => self.one_month,
            "3M" => self.three_months,
            "6M" => self.six_months,
            "ytd" | "YTD" => self.year_to_date,
            "1Y" => self.one_year,
            "3Y" => self.three_years,
            "5Y" => self.five_years,
            "10Y" => self.ten_years,
            "max" => self.max,
            _ => None,
        }
    }

    /// Percent change for a chart timeframe.
    pub fn for_timeframe(&self, timeframe: Timeframe) -> Option<f64> {
        self.get(timeframe.key())
    }
}
