//! ML risk-signal helpers: driver decoding and risk history.

use serde::Deserialize;

use crate::types::signals::{MlDriver, MlSignal, RiskPoint};

#[derive(Deserialize)]
struct DriversDocument {
    #[serde(default)]
    top_drivers: Vec<MlDriver>,
}

impl MlSignal {
    /// Features that contributed most to this signal's risk score.
    ///
    /// Empty when `drivers_json` is absent or malformed.
    pub fn top_drivers(&self) -> Vec<MlDriver> {
        let Some(raw) = self.drivers_json.as_deref() else {
            return Vec::new();
        };
        match serde_json::from_str::<DriversDocument>(raw) {
            Ok(doc) => doc.top_drivers,
            Err(err) => {
                tracing::warn!(ticker = %self.ticker, date = %self.signal_date, error = %err, "malformed drivers JSON");
                Vec::new()
            }
        }
    }
}

impl MlDriver {
    /// Human-readable name of the feature; unknown codes are returned as-is.
    pub fn display_name(&self) -> &str {
        match self.feature.as_str() {
            "vol_30d" => "30d Volatility",
            "vol_14d" => "14d Volatility",
            "volume_z_30d" => "Volume spike (z-score)",
            "drawdown_30d" => "30d Drawdown",
            "beta_60d" => "60d Beta",
            "corr_60d" => "60d Corr to SPY",
            "rsi_14" => "RSI (14)",
            "log_return_1d" => "1d Return",
            "log_return_7d" => "7d Return",
            "log_return_14d" => "14d Return",
            other => other,
        }
    }

    /// Whether the value sits in the outer fifths of its history.
    pub fn is_extreme(&self) -> bool {
        self.pct > 0.8 || self.pct < 0.2
    }
}

/// Most recent signal of a most-recent-first list.
pub fn latest(signals: &[MlSignal]) -> Option<&MlSignal> {
    signals.first()
}

/// Risk scores in ascending date order, from a most-recent-first list.
pub fn risk_history(signals: &[MlSignal]) -> Vec<RiskPoint> {
    signals
        .iter()
        .rev()
        .map(|s| RiskPoint {
            date: s.signal_date,
            risk: s.risk_score,
        })
        .collect()
}
