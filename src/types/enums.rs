//! Shared enum types used by requests, responses and the chart assembler.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

// ---------------------------------------------------------------------------
// Timeframe
// ---------------------------------------------------------------------------

/// Display window for a price chart.
///
/// Serialized with the same keys the price-change table uses, so a timeframe
/// can be used directly to look up its upstream percent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    /// Today's session on a fixed 5-minute grid.
    #[default]
    #[serde(rename = "1D")]
    OneDay,
    /// The five most recent trading days of intraday samples.
    #[serde(rename = "5D")]
    FiveDays,
    /// The most recent 21 daily sessions.
    #[serde(rename = "1M")]
    OneMonth,
    /// Daily sessions of the current calendar year.
    #[serde(rename = "ytd", alias = "YTD")]
    YearToDate,
    /// The most recent 251 daily sessions.
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    /// All selectable timeframes, in display order.
    pub const ALL: [Timeframe; 5] = [
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::YearToDate,
        Self::OneYear,
    ];

    /// The key of this timeframe in the upstream price-change table.
    pub fn key(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::FiveDays => "5D",
            Self::OneMonth => "1M",
            Self::YearToDate => "ytd",
            Self::OneYear => "1Y",
        }
    }

    /// Whether the timeframe is built from the intraday series.
    pub fn is_intraday(self) -> bool {
        matches!(self, Self::OneDay | Self::FiveDays)
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearToDate => f.write_str("YTD"),
            other => f.write_str(other.key()),
        }
    }
}

impl FromStr for Timeframe {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "5D" => Ok(Self::FiveDays),
            "1M" => Ok(Self::OneMonth),
            "YTD" => Ok(Self::YearToDate),
            "1Y" => Ok(Self::OneYear),
            _ => Err(DashboardError::InvalidArgument(format!(
                "unknown timeframe `{s}` (expected 1D, 5D, 1M, YTD or 1Y)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Market leader list
// ---------------------------------------------------------------------------

/// Which ranked market-leader list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderKind {
    /// Biggest percentage gainers.
    Gainers,
    /// Biggest percentage losers.
    Losers,
    /// Most actively traded.
    Actives,
}

impl LeaderKind {
    /// Path segment used by the market-leaders endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gainers => "gainers",
            Self::Losers => "losers",
            Self::Actives => "actives",
        }
    }
}

impl fmt::Display for LeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Market-cap tier
// ---------------------------------------------------------------------------

/// Market-capitalisation bucket used by the screener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketCapTier {
    /// Above $200B.
    Mega,
    /// $10B to $200B.
    Large,
    /// $2B to $10B.
    Mid,
    /// $300M to $2B.
    Small,
    /// Below $300M.
    Micro,
}

impl MarketCapTier {
    /// All tiers, largest first.
    pub const ALL: [MarketCapTier; 5] = [
        Self::Mega,
        Self::Large,
        Self::Mid,
        Self::Small,
        Self::Micro,
    ];

    /// Half-open `[min, max)` market-cap bounds of the tier.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Mega => (200e9, f64::INFINITY),
            Self::Large => (10e9, 200e9),
            Self::Mid => (2e9, 10e9),
            Self::Small => (300e6, 2e9),
            Self::Micro => (0.0, 300e6),
        }
    }

    /// Whether `market_cap` falls inside the tier.
    pub fn contains(self, market_cap: f64) -> bool {
        let (min, max) = self.bounds();
        market_cap >= min && market_cap < max
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Mega => "Mega Cap (>$200B)",
            Self::Large => "Large Cap ($10B-$200B)",
            Self::Mid => "Mid Cap ($2B-$10B)",
            Self::Small => "Small Cap ($300M-$2B)",
            Self::Micro => "Micro Cap (<$300M)",
        }
    }
}
