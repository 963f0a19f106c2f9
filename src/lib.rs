//! # marketboard
//!
//! A Rust client library for a stock dashboard's REST backends: quotes,
//! intraday and daily price history, company profiles, market leaders,
//! screener listings, sector performance, news, and ML risk signals.
//!
//! On top of the typed client it provides:
//!
//! - [`chart`]: the timeframe chart assembler (`1D`, `5D`, `1M`, `YTD`, `1Y`)
//! - [`cache`]: a request-keyed response cache with per-endpoint TTLs
//! - [`session`]: an explicit signed-in user session
//! - [`screener`] and [`signals`]: listing filters and risk-driver helpers
//! - [`dashboard`]: a cached facade assembling the stock detail view
//!
//! ## Quick Start
//!
//! ```no_run
//! use marketboard::{Dashboard, DashboardClient};
//! use marketboard::types::Timeframe;
//!
//! #[tokio::main]
//! async fn main() -> marketboard::error::Result<()> {
//!     let client = DashboardClient::from_config(&marketboard::config::ClientConfig::from_env()?)?;
//!     let dashboard = Dashboard::new(client);
//!     let detail = dashboard.stock_detail("AAPL", Timeframe::FiveDays).await?;
//!     println!("{} {:?}", detail.quote.current_price, detail.change);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cache;
pub mod chart;
pub mod client;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod screener;
pub mod session;
pub mod signals;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::DashboardClient;
/// Re-export the cached facade.
pub use dashboard::Dashboard;
/// Re-export the error type and Result alias.
pub use error::{DashboardError, Result};
