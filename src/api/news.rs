//! News endpoints.

use crate::api::symbol_arg;
use crate::client::{DashboardClient, Service};
use crate::error::Result;
use crate::types::news::NewsArticle;

impl DashboardClient {
    /// Retrieve general market news.
    ///
    /// **Endpoint:** `GET /general-news` (news service)
    pub async fn get_general_news(&self) -> Result<Vec<NewsArticle>> {
        self.get(Service::News, &["general-news"]).await
    }

    /// Retrieve news about one company.
    ///
    /// **Endpoint:** `GET /company-news/{symbol}` (news service)
    pub async fn get_company_news(&self, symbol: &str) -> Result<Vec<NewsArticle>> {
        self.get(Service::News, &["company-news", symbol_arg(symbol)?])
            .await
    }
}
