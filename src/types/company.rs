#![allow(missing_docs)]
//! Company profile type.

use serde::Deserialize;

use crate::types::de;

/// Company profile from `GET /company-profile/{symbol}`.
///
/// Two field sets exist upstream (`mktCap`/`lastDiv`/`volAvg` and
/// `marketCap`/`lastDividend`/`averageVolume`); both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub beta: Option<f64>,
    #[serde(
        rename = "volAvg",
        alias = "averageVolume",
        default,
        deserialize_with = "de::opt_number_or_string"
    )]
    pub average_volume: Option<f64>,
    #[serde(
        rename = "mktCap",
        alias = "marketCap",
        default,
        deserialize_with = "de::opt_number_or_string"
    )]
    pub market_cap: Option<f64>,
    #[serde(
        rename = "lastDiv",
        alias = "lastDividend",
        alias = "lasDiv",
        default,
        deserialize_with = "de::opt_number_or_string"
    )]
    pub last_dividend: Option<f64>,
    /// 52-week range, e.g. `"164.08-237.23"`.
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub changes: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub cik: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub cusip: Option<String>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub exchange_short_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ceo: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub full_time_employees: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string_or_number")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub dcf_diff: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub dcf: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ipo_date: Option<String>,
    #[serde(default, deserialize_with = "de::opt_bool_or_string")]
    pub is_etf: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool_or_string")]
    pub is_actively_trading: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool_or_string")]
    pub is_adr: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool_or_string")]
    pub is_fund: Option<bool>,
}

impl CompanyProfile {
    /// Parse the 52-week `range` string into `(low, high)`.
    pub fn year_range(&self) -> Option<(f64, f64)> {
        let (low, high) = self.range.as_deref()?.split_once('-')?;
        Some((low.trim().parse().ok()?, high.trim().parse().ok()?))
    }
}
