#![allow(missing_docs)]
//! Market-wide types: leaders, screener listing, sector performance, symbols.

use serde::Deserialize;

use crate::types::de;

// ---------------------------------------------------------------------------
// Market leaders
// ---------------------------------------------------------------------------

/// Entry of a ranked gainers / losers / most-active list.
///
/// Numeric fields arrive as strings from the stock service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketLeader {
    pub symbol: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(deserialize_with = "de::number_or_string")]
    pub price: f64,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub change: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub changes_percentage: Option<f64>,
    #[serde(default)]
    pub exchange: Option<String>,
}

impl MarketLeader {
    /// Whether the move is upward. Missing figures count as flat.
    pub fn is_up(&self) -> bool {
        self.changes_percentage.or(self.change).unwrap_or(0.0) > 0.0
    }
}

// ---------------------------------------------------------------------------
// Screener
// ---------------------------------------------------------------------------

/// Row of the stock screener listing from `GET /stock-screener`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerEntry {
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub beta: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_number_or_string")]
    pub volume: Option<f64>,
    #[serde(default)]
    pub exchange: Option<String>,
    #[serde(default)]
    pub exchange_short_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "de::opt_bool_or_string")]
    pub is_etf: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool_or_string")]
    pub is_fund: Option<bool>,
    #[serde(default, deserialize_with = "de::opt_bool_or_string")]
    pub is_actively_trading: Option<bool>,
}

// ---------------------------------------------------------------------------
// Sector performance
// ---------------------------------------------------------------------------

/// Daily performance of one market sector from `GET /sectors-performance`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorPerformance {
    pub sector: String,
    /// Percent change as sent upstream, e.g. `"-0.5123%"`.
    pub changes_percentage: String,
}

impl SectorPerformance {
    /// Percent change as a number, with any `%` suffix removed.
    pub fn percent(&self) -> Option<f64> {
        self.changes_percentage
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse()
            .ok()
    }
}

// ---------------------------------------------------------------------------
// Symbol universe
// ---------------------------------------------------------------------------

/// Entry of the US symbol list from `GET /all-us-symbols`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsSymbol {
    pub symbol: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_symbol: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub figi: Option<String>,
    #[serde(default)]
    pub isin: Option<String>,
    #[serde(default)]
    pub mic: Option<String>,
    #[serde(default, rename = "type")]
    pub security_type: Option<String>,
}
