//! Constants for the dashboard backends.
//!
//! Contains default base URLs, environment variable names, cache lifetimes,
//! and the windowing parameters used by the chart assembler.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Default base URL of the stock service (quotes, charts, screener).
pub const STOCK_API_BASE_URL: &str = "http://localhost:8080/api/stock";

/// Default base URL of the news service.
pub const NEWS_API_BASE_URL: &str = "http://localhost:8080/api/news";

/// Default base URL of the ML / relational data service (signals, daily history).
pub const ML_API_BASE_URL: &str = "http://localhost:8080/api/rds";

// ---------------------------------------------------------------------------
// Environment variables
// ---------------------------------------------------------------------------

/// Environment variable overriding [`STOCK_API_BASE_URL`].
pub const ENV_STOCK_API_URL: &str = "MARKETBOARD_STOCK_API_URL";

/// Environment variable overriding [`NEWS_API_BASE_URL`].
pub const ENV_NEWS_API_URL: &str = "MARKETBOARD_NEWS_API_URL";

/// Environment variable overriding [`ML_API_BASE_URL`].
pub const ENV_ML_API_URL: &str = "MARKETBOARD_ML_API_URL";

/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "MARKETBOARD_TIMEOUT_SECS";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of ML signals requested when the caller does not say.
pub const DEFAULT_SIGNAL_LIMIT: u32 = 180;

// ---------------------------------------------------------------------------
// Cache lifetimes
// ---------------------------------------------------------------------------

/// Time-to-live of cached responses, per data category (in seconds).
pub mod ttl {
    /// Current quote.
    pub const QUOTE_SECS: u64 = 5 * 60;
    /// Intraday chart samples.
    pub const INTRADAY_CHART_SECS: u64 = 15 * 60;
    /// Daily-full chart history.
    pub const DAILY_CHART_SECS: u64 = 24 * 60;
    /// Price-change table.
    pub const PRICE_CHANGE_SECS: u64 = 12 * 60 * 60;
    /// Company profile.
    pub const COMPANY_PROFILE_SECS: u64 = 24 * 60;
    /// General and company news.
    pub const NEWS_SECS: u64 = 15 * 60;
    /// Market leaders (gainers, losers, most active).
    pub const MARKET_LEADERS_SECS: u64 = 15 * 60;
    /// Screener listing and sector performance.
    pub const SCREENER_SECS: u64 = 6 * 60 * 60;
    /// Full list of US symbols.
    pub const US_SYMBOLS_SECS: u64 = 12 * 60 * 60;
    /// ML risk signals.
    pub const ML_SIGNALS_SECS: u64 = 24 * 60 * 60;
}

// ---------------------------------------------------------------------------
// Chart windowing
// ---------------------------------------------------------------------------

/// Chart windowing parameters for each timeframe.
pub mod chart {
    /// Regular session open, as (hour, minute).
    pub const SESSION_OPEN: (u32, u32) = (9, 30);
    /// Regular session close, as (hour, minute). The last slot ends here.
    pub const SESSION_CLOSE: (u32, u32) = (16, 0);
    /// Spacing of the intraday slot grid, in minutes.
    pub const SLOT_MINUTES: u32 = 5;
    /// Number of 5-minute slots between open and close.
    pub const SLOTS_PER_SESSION: usize = 78;
    /// Trading days shown by the five-day view.
    pub const FIVE_DAY_SESSIONS: usize = 5;
    /// Trading sessions approximating one month.
    pub const ONE_MONTH_SESSIONS: usize = 21;
    /// Trading sessions approximating one year.
    pub const ONE_YEAR_SESSIONS: usize = 251;
}
