//! Market-wide endpoints: leaders, screener, sector performance, symbol list.

use crate::client::{DashboardClient, Service};
use crate::error::Result;
use crate::types::LeaderKind;
use crate::types::market::*;

impl DashboardClient {
    /// Retrieve a ranked market-leader list.
    ///
    /// **Endpoint:** `GET /market-leaders/{gainers|losers|actives}`
    pub async fn get_market_leaders(&self, kind: LeaderKind) -> Result<Vec<MarketLeader>> {
        self.get(Service::Stock, &["market-leaders", kind.as_str()])
            .await
    }

    /// Retrieve the unfiltered screener listing.
    ///
    /// Filter it with [`crate::screener`].
    ///
    /// **Endpoint:** `GET /stock-screener`
    pub async fn get_stock_screener(&self) -> Result<Vec<ScreenerEntry>> {
        self.get(Service::Stock, &["stock-screener"]).await
    }

    /// Retrieve today's performance per market sector.
    ///
    /// **Endpoint:** `GET /sectors-performance`
    pub async fn get_sector_performance(&self) -> Result<Vec<SectorPerformance>> {
        self.get(Service::Stock, &["sectors-performance"]).await
    }

    /// Retrieve every US-listed symbol, for search.
    ///
    /// **Endpoint:** `GET /all-us-symbols`
    pub async fn get_all_us_symbols(&self) -> Result<Vec<UsSymbol>> {
        self.get(Service::Stock, &["all-us-symbols"]).await
    }
}
