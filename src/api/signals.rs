//! ML risk-signal endpoint.

use crate::api::symbol_arg;
use crate::client::{DashboardClient, Service};
use crate::constants::DEFAULT_SIGNAL_LIMIT;
use crate::error::{DashboardError, Result};
use crate::types::signals::MlSignal;

impl DashboardClient {
    /// Retrieve up to `limit` daily risk signals, most recent first.
    ///
    /// The symbol is upper-cased. `None` requests the default of 180.
    ///
    /// **Endpoint:** `GET /signals/{SYMBOL}?limit={limit}` (ML service)
    pub async fn get_ml_signals(&self, symbol: &str, limit: Option<u32>) -> Result<Vec<MlSignal>> {
        let limit = limit.unwrap_or(DEFAULT_SIGNAL_LIMIT);
        if limit == 0 {
            return Err(DashboardError::InvalidArgument("limit must be at least 1".into()));
        }
        let ticker = symbol_arg(symbol)?.to_ascii_uppercase();
        self.get_with_query(Service::Ml, &["signals", &ticker], &[("limit", limit.to_string())])
            .await
    }
}
