//! Quote endpoints: full quote, Finnhub quote, price-change table.

use crate::api::symbol_arg;
use crate::client::{DashboardClient, Service};
use crate::error::Result;
use crate::types::quote::*;

impl DashboardClient {
    /// Retrieve the full quote for a symbol.
    ///
    /// **Endpoint:** `GET /quote/{symbol}`
    pub async fn get_stock_quote(&self, symbol: &str) -> Result<StockQuote> {
        self.get(Service::Stock, &["quote", symbol_arg(symbol)?]).await
    }

    /// Retrieve the current quote for a symbol, mapped to descriptive names.
    ///
    /// Supplies the current price and previous close used by the chart
    /// price-change figure.
    ///
    /// **Endpoint:** `GET /finnhub/quote/{symbol}`
    pub async fn get_quote(&self, symbol: &str) -> Result<Quote> {
        let raw: FinnhubQuote = self
            .get(Service::Stock, &["finnhub", "quote", symbol_arg(symbol)?])
            .await?;
        Ok(raw.into())
    }

    /// Retrieve percent changes over standard periods (1D through max).
    ///
    /// **Endpoint:** `GET /stock-price-change/{symbol}`
    pub async fn get_price_change(&self, symbol: &str) -> Result<PriceChangeTable> {
        self.get(Service::Stock, &["stock-price-change", symbol_arg(symbol)?])
            .await
    }
}
