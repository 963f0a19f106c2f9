//! REST API endpoint implementations.
//!
//! Each sub-module adds high-level `async` methods to
//! [`DashboardClient`](crate::client::DashboardClient) via `impl` blocks. All
//! methods handle URL building, HTTP transport, JSON deserialization and
//! error mapping automatically.
//!
//! ## Usage
//!
//! ```no_run
//! use marketboard::DashboardClient;
//! use marketboard::types::LeaderKind;
//!
//! # #[tokio::main]
//! # async fn main() -> marketboard::Result<()> {
//! let client = DashboardClient::new()?;
//! let quote = client.get_quote("MSFT").await?;
//! let gainers = client.get_market_leaders(LeaderKind::Gainers).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Service | Endpoints | Description |
//! |---|---|---|---|
//! | [`quote`] | stock | 3 | Full quote, Finnhub quote, price-change table |
//! | [`historical`] | stock, ML | 2 | Intraday and daily-full chart series |
//! | [`company`] | stock | 1 | Company profile |
//! | [`market`] | stock | 4 | Market leaders, screener, sectors, symbol list |
//! | [`news`] | news | 2 | General and company news |
//! | [`signals`] | ML | 1 | ML risk signals |

pub mod company;
pub mod historical;
pub mod market;
pub mod news;
pub mod quote;
pub mod signals;

use crate::error::{DashboardError, Result};

/// Validate a ticker symbol argument.
pub(crate) fn symbol_arg(symbol: &str) -> Result<&str> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(DashboardError::InvalidArgument("symbol must not be empty".into()));
    }
    Ok(symbol)
}
