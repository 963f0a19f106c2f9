#![allow(missing_docs)]
//! ML risk-signal types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily risk signal from `GET /signals/{SYMBOL}`.
///
/// The upstream list is ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MlSignal {
    pub ticker: String,
    pub signal_date: NaiveDate,
    #[serde(default)]
    pub regime_label: Option<String>,
    /// Risk score, 0–100.
    #[serde(default)]
    pub risk_score: Option<i32>,
    /// Raw JSON text with a `top_drivers` array.
    #[serde(default)]
    pub drivers_json: Option<String>,
}

/// A feature contributing to a risk score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlDriver {
    /// Feature code, e.g. `vol_30d`.
    pub feature: String,
    /// Raw feature value.
    pub value: f64,
    /// Percentile of the value within the ticker's history, 0–1.
    pub pct: f64,
}

/// Point of the risk-score history chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskPoint {
    pub date: NaiveDate,
    pub risk: Option<i32>,
}
