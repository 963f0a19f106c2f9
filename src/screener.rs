//! Screener filtering, market-cap formatting, volume spikes and symbol search.
//!
//! All functions work on listings already fetched with
//! [`DashboardClient::get_stock_screener`](crate::client::DashboardClient::get_stock_screener)
//! and [`DashboardClient::get_all_us_symbols`](crate::client::DashboardClient::get_all_us_symbols).

use std::cmp::Ordering;

use crate::types::MarketCapTier;
use crate::types::market::{ScreenerEntry, UsSymbol};

/// Sectors offered by the screener's sector filter.
pub const SECTORS: [&str; 11] = [
    "Technology",
    "Healthcare",
    "Financial Services",
    "Consumer Cyclical",
    "Energy",
    "Industrials",
    "Real Estate",
    "Utilities",
    "Basic Materials",
    "Communication Services",
    "Consumer Defensive",
];

/// Whether an entry is a live, US-listed operating company.
///
/// Requires country `US`, a NASDAQ or NYSE listing, a sector, non-zero
/// volume, and excludes ETFs and funds.
pub fn is_listed_us_equity(entry: &ScreenerEntry) -> bool {
    entry.country.as_deref() == Some("US")
        && matches!(entry.exchange_short_name.as_deref(), Some("NASDAQ" | "NYSE"))
        && entry.sector.as_deref().is_some_and(|s| !s.is_empty())
        && entry.is_etf != Some(true)
        && entry.is_fund != Some(true)
        && entry.volume.unwrap_or(0.0) > 0.0
}

/// User-selected screener criteria. `None` fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenerFilter {
    pub sector: Option<String>,
    pub market_cap: Option<MarketCapTier>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ScreenerFilter {
    /// Whether an entry satisfies every set criterion.
    pub fn matches(&self, entry: &ScreenerEntry) -> bool {
        if let Some(sector) = &self.sector {
            if entry.sector.as_deref() != Some(sector.as_str()) {
                return false;
            }
        }
        if let Some(tier) = self.market_cap {
            if !entry.market_cap.is_some_and(|cap| tier.contains(cap)) {
                return false;
            }
        }
        let price = entry.price.unwrap_or(0.0);
        if self.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| price > max) {
            return false;
        }
        true
    }

    /// Listed US equities that satisfy the filter, in listing order.
    pub fn apply<'a>(&self, entries: &'a [ScreenerEntry]) -> Vec<&'a ScreenerEntry> {
        entries
            .iter()
            .filter(|e| is_listed_us_equity(e) && self.matches(e))
            .collect()
    }
}

/// Format a market cap as `1.23T`, `4.56B`, `7.89M`, or the plain number.
pub fn format_market_cap(market_cap: f64) -> String {
    if market_cap > 1e12 {
        format!("{:.2}T", market_cap / 1e12)
    } else if market_cap > 1e9 {
        format!("{:.2}B", market_cap / 1e9)
    } else if market_cap > 1e6 {
        format!("{:.2}M", market_cap / 1e6)
    } else {
        market_cap.to_string()
    }
}

/// The `n` highest-volume entries, highest first.
pub fn volume_spikes(entries: &[ScreenerEntry], n: usize) -> Vec<&ScreenerEntry> {
    let mut sorted: Vec<&ScreenerEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        let (a, b) = (a.volume.unwrap_or(0.0), b.volume.unwrap_or(0.0));
        b.partial_cmp(&a).unwrap_or(Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Symbols whose ticker starts with, or whose description contains, `term`.
///
/// Case-insensitive. A blank term matches nothing.
pub fn search_symbols<'a>(symbols: &'a [UsSymbol], term: &str) -> Vec<&'a UsSymbol> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    symbols
        .iter()
        .filter(|s| {
            s.symbol.to_lowercase().starts_with(&term) || s.description.to_lowercase().contains(&term)
        })
        .collect()
}
