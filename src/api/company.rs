//! Company profile endpoint.

use crate::api::symbol_arg;
use crate::client::{DashboardClient, Service};
use crate::error::Result;
use crate::types::company::CompanyProfile;

impl DashboardClient {
    /// Retrieve the company profile for a symbol.
    ///
    /// **Endpoint:** `GET /company-profile/{symbol}`
    pub async fn get_company_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        self.get(Service::Stock, &["company-profile", symbol_arg(symbol)?])
            .await
    }
}
