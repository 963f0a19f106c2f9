//! Cached dashboard facade.
//!
//! [`Dashboard`] puts a [`ResponseCache`] in front of every
//! [`DashboardClient`] endpoint and assembles the per-symbol detail view:
//! current quote, chart for the selected timeframe, and price change.
//!
//! ```no_run
//! use marketboard::Dashboard;
//! use marketboard::types::Timeframe;
//!
//! # #[tokio::main]
//! # async fn main() -> marketboard::Result<()> {
//! let dashboard = Dashboard::new(marketboard::DashboardClient::new()?);
//!
//! let today = dashboard.stock_detail("AAPL", Timeframe::OneDay).await?;
//! // Switching timeframe re-assembles from cached series.
//! let month = dashboard.stock_detail("AAPL", Timeframe::OneMonth).await?;
//! println!("{} points, change {:?}", month.chart.len(), month.change.absolute);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::api::symbol_arg;
use crate::cache::{CacheKey, Endpoint, ResponseCache};
use crate::chart;
use crate::client::DashboardClient;
use crate::error::Result;
use crate::types::LeaderKind;
use crate::types::Timeframe;
use crate::types::chart::{ChartPoint, DailyBar, IntradayBar, PriceChange};
use crate::types::company::CompanyProfile;
use crate::types::market::{MarketLeader, ScreenerEntry, SectorPerformance, UsSymbol};
use crate::types::news::NewsArticle;
use crate::types::quote::{PriceChangeTable, Quote};
use crate::types::signals::MlSignal;

/// Everything the stock detail view renders for one symbol and timeframe.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetail {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub quote: Quote,
    pub chart: Vec<ChartPoint>,
    pub change: PriceChange,
}

/// Caching front for [`DashboardClient`].
#[derive(Debug)]
pub struct Dashboard {
    client: DashboardClient,
    quotes: ResponseCache<Quote>,
    intraday: ResponseCache<Arc<Vec<IntradayBar>>>,
    daily: ResponseCache<Arc<Vec<DailyBar>>>,
    price_changes: ResponseCache<PriceChangeTable>,
    profiles: ResponseCache<Arc<CompanyProfile>>,
    news: ResponseCache<Arc<Vec<NewsArticle>>>,
    leaders: ResponseCache<Arc<Vec<MarketLeader>>>,
    screener: ResponseCache<Arc<Vec<ScreenerEntry>>>,
    sectors: ResponseCache<Arc<Vec<SectorPerformance>>>,
    symbols: ResponseCache<Arc<Vec<UsSymbol>>>,
    signals: ResponseCache<Arc<Vec<MlSignal>>>,
}

/// Upper-cased, trimmed symbol used for both the request and the cache key.
fn normalize(symbol: &str) -> Result<String> {
    Ok(symbol_arg(symbol)?.to_ascii_uppercase())
}

impl Dashboard {
    /// Wrap a client with empty caches.
    pub fn new(client: DashboardClient) -> Self {
        Self {
            client,
            quotes: ResponseCache::new(),
            intraday: ResponseCache::new(),
            daily: ResponseCache::new(),
            price_changes: ResponseCache::new(),
            profiles: ResponseCache::new(),
            news: ResponseCache::new(),
            leaders: ResponseCache::new(),
            screener: ResponseCache::new(),
            sectors: ResponseCache::new(),
            symbols: ResponseCache::new(),
            signals: ResponseCache::new(),
        }
    }

    /// The underlying client.
    pub fn client(&self) -> &DashboardClient {
        &self.client
    }

    /// Mutable access to the client, e.g. to attach or clear a session.
    pub fn client_mut(&mut self) -> &mut DashboardClient {
        &mut self.client
    }

    // -----------------------------------------------------------------------
    // Per-symbol data
    // -----------------------------------------------------------------------

    /// Current quote.
    pub async fn quote(&self, symbol: &str) -> Result<Quote> {
        let symbol = normalize(symbol)?;
        let client = self.client.clone();
        self.quotes
            .get_or_fetch(CacheKey::new(Endpoint::Quote, &symbol), move || async move {
                client.get_quote(&symbol).await
            })
            .await
    }

    /// Intraday samples, most recent first.
    pub async fn intraday_chart(&self, symbol: &str) -> Result<Arc<Vec<IntradayBar>>> {
        let symbol = normalize(symbol)?;
        let client = self.client.clone();
        self.intraday
            .get_or_fetch(CacheKey::new(Endpoint::IntradayChart, &symbol), move || async move {
                client.get_intraday_chart(&symbol).await.map(Arc::new)
            })
            .await
    }

    /// Daily sessions, most recent first.
    pub async fn daily_chart(&self, symbol: &str) -> Result<Arc<Vec<DailyBar>>> {
        let symbol = normalize(symbol)?;
        let client = self.client.clone();
        self.daily
            .get_or_fetch(CacheKey::new(Endpoint::DailyChart, &symbol), move || async move {
                client.get_daily_chart(&symbol).await.map(Arc::new)
            })
            .await
    }

    /// Percent change per period.
    pub async fn price_change_table(&self, symbol: &str) -> Result<PriceChangeTable> {
        let symbol = normalize(symbol)?;
        let client = self.client.clone();
        self.price_changes
            .get_or_fetch(CacheKey::new(Endpoint::PriceChange, &symbol), move || async move {
                client.get_price_change(&symbol).await
            })
            .await
    }

    /// Company profile.
    pub async fn company_profile(&self, symbol: &str) -> Result<Arc<CompanyProfile>> {
        let symbol = normalize(symbol)?;
        let client = self.client.clone();
        self.profiles
            .get_or_fetch(CacheKey::new(Endpoint::CompanyProfile, &symbol), move || async move {
                client.get_company_profile(&symbol).await.map(Arc::new)
            })
            .await
    }

    /// Company news.
    pub async fn company_news(&self, symbol: &str) -> Result<Arc<Vec<NewsArticle>>> {
        let symbol = normalize(symbol)?;
        let client = self.client.clone();
        self.news
            .get_or_fetch(CacheKey::new(Endpoint::CompanyNews, &symbol), move || async move {
                client.get_company_news(&symbol).await.map(Arc::new)
            })
            .await
    }

    /// ML risk signals (default limit), most recent first.
    pub async fn ml_signals(&self, symbol: &str) -> Result<Arc<Vec<MlSignal>>> {
        let symbol = normalize(symbol)?;
        let client = self.client.clone();
        self.signals
            .get_or_fetch(CacheKey::new(Endpoint::MlSignals, &symbol), move || async move {
                client.get_ml_signals(&symbol, None).await.map(Arc::new)
            })
            .await
    }

    // -----------------------------------------------------------------------
    // Market-wide data
    // -----------------------------------------------------------------------

    /// General market news.
    pub async fn general_news(&self) -> Result<Arc<Vec<NewsArticle>>> {
        let client = self.client.clone();
        self.news
            .get_or_fetch(CacheKey::global(Endpoint::GeneralNews), move || async move {
                client.get_general_news().await.map(Arc::new)
            })
            .await
    }

    /// Ranked gainers, losers or most-active list.
    pub async fn market_leaders(&self, kind: LeaderKind) -> Result<Arc<Vec<MarketLeader>>> {
        let client = self.client.clone();
        self.leaders
            .get_or_fetch(CacheKey::new(Endpoint::MarketLeaders, kind.as_str()), move || async move {
                client.get_market_leaders(kind).await.map(Arc::new)
            })
            .await
    }

    /// Unfiltered screener listing.
    pub async fn screener(&self) -> Result<Arc<Vec<ScreenerEntry>>> {
        let client = self.client.clone();
        self.screener
            .get_or_fetch(CacheKey::global(Endpoint::Screener), move || async move {
                client.get_stock_screener().await.map(Arc::new)
            })
            .await
    }

    /// Sector performance.
    pub async fn sector_performance(&self) -> Result<Arc<Vec<SectorPerformance>>> {
        let client = self.client.clone();
        self.sectors
            .get_or_fetch(CacheKey::global(Endpoint::SectorPerformance), move || async move {
                client.get_sector_performance().await.map(Arc::new)
            })
            .await
    }

    /// Every US-listed symbol.
    pub async fn us_symbols(&self) -> Result<Arc<Vec<UsSymbol>>> {
        let client = self.client.clone();
        self.symbols
            .get_or_fetch(CacheKey::global(Endpoint::UsSymbols), move || async move {
                client.get_all_us_symbols().await.map(Arc::new)
            })
            .await
    }

    // -----------------------------------------------------------------------
    // Assembled views
    // -----------------------------------------------------------------------

    /// Chart points for `symbol` over `timeframe`.
    ///
    /// Only the series the timeframe needs is fetched.
    pub async fn chart(&self, symbol: &str, timeframe: Timeframe) -> Result<Vec<ChartPoint>> {
        if timeframe.is_intraday() {
            let intraday = self.intraday_chart(symbol).await?;
            Ok(chart::assemble(timeframe, &intraday, &[]))
        } else {
            let daily = self.daily_chart(symbol).await?;
            Ok(chart::assemble(timeframe, &[], &daily))
        }
    }

    /// Quote, chart and price change for the stock detail view.
    ///
    /// The quote and both chart series are fetched concurrently and any of
    /// their errors is returned. A failed price-change table only leaves the
    /// percent figure absent.
    pub async fn stock_detail(&self, symbol: &str, timeframe: Timeframe) -> Result<StockDetail> {
        let symbol = normalize(symbol)?;

        let (quote, intraday, daily, table) = tokio::join!(
            self.quote(&symbol),
            self.intraday_chart(&symbol),
            self.daily_chart(&symbol),
            self.price_change_table(&symbol),
        );
        let (quote, intraday, daily) = (quote?, intraday?, daily?);
        let table = match table {
            Ok(table) => Some(table),
            Err(err) => {
                tracing::warn!(%symbol, error = %err, "price change unavailable");
                None
            }
        };

        let chart = chart::assemble(timeframe, &intraday, &daily);
        let change = chart::price_change(
            timeframe,
            Some(quote.current_price),
            quote.previous_close_price,
            &chart,
            table.as_ref(),
        );

        Ok(StockDetail {
            symbol,
            timeframe,
            quote,
            chart,
            change,
        })
    }

    /// Drop every cached response for `symbol`, forcing the next call to refetch.
    pub async fn invalidate_symbol(&self, symbol: &str) -> Result<()> {
        let symbol = normalize(symbol)?;
        self.quotes.invalidate(&CacheKey::new(Endpoint::Quote, &symbol)).await;
        self.intraday.invalidate(&CacheKey::new(Endpoint::IntradayChart, &symbol)).await;
        self.daily.invalidate(&CacheKey::new(Endpoint::DailyChart, &symbol)).await;
        self.price_changes.invalidate(&CacheKey::new(Endpoint::PriceChange, &symbol)).await;
        self.profiles.invalidate(&CacheKey::new(Endpoint::CompanyProfile, &symbol)).await;
        self.news.invalidate(&CacheKey::new(Endpoint::CompanyNews, &symbol)).await;
        self.signals.invalidate(&CacheKey::new(Endpoint::MlSignals, &symbol)).await;
        Ok(())
    }

    /// Drop expired and stale responses from every cache.
    ///
    /// Returns the number of entries removed. Meant to be called periodically
    /// by long-running hosts.
    pub async fn purge_stale(&self) -> usize {
        let removed = self.quotes.purge_stale().await
            + self.intraday.purge_stale().await
            + self.daily.purge_stale().await
            + self.price_changes.purge_stale().await
            + self.profiles.purge_stale().await
            + self.news.purge_stale().await
            + self.leaders.purge_stale().await
            + self.screener.purge_stale().await
            + self.sectors.purge_stale().await
            + self.symbols.purge_stale().await
            + self.signals.purge_stale().await;
        tracing::debug!(removed, "dashboard caches purged");
        removed
    }
}
