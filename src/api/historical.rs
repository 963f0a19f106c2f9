//! Historical chart endpoints: intraday samples and daily-full history.

use crate::api::symbol_arg;
use crate::client::{DashboardClient, Service};
use crate::error::Result;
use crate::types::chart::*;
use crate::types::de::lenient_rows;

impl DashboardClient {
    /// Retrieve intraday 5-minute samples for the most recent trading days.
    ///
    /// Returned most-recent-first. Feeds the `1D` and `5D` charts. Rows that
    /// cannot be parsed are skipped.
    ///
    /// **Endpoint:** `GET /historical-chart/{symbol}`
    pub async fn get_intraday_chart(&self, symbol: &str) -> Result<Vec<IntradayBar>> {
        let rows: Vec<serde_json::Value> = self
            .get(Service::Stock, &["historical-chart", symbol_arg(symbol)?])
            .await?;
        Ok(lenient_rows(rows, "intraday"))
    }

    /// Retrieve one close per session, a year or more back.
    ///
    /// Returned most-recent-first. Feeds the `1M`, `YTD` and `1Y` charts.
    /// Served from the ML / relational data service's price store. Rows that
    /// cannot be parsed are skipped.
    ///
    /// **Endpoint:** `GET /historical-price-full/{symbol}`
    pub async fn get_daily_chart(&self, symbol: &str) -> Result<Vec<DailyBar>> {
        let rows: Vec<serde_json::Value> = self
            .get(Service::Ml, &["historical-price-full", symbol_arg(symbol)?])
            .await?;
        Ok(lenient_rows(rows, "daily"))
    }
}
