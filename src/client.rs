//! Core HTTP client for the dashboard backends.
//!
//! The [`DashboardClient`] struct is the main entry point for the three
//! upstream REST services: the stock service, the news service and the
//! ML / relational data service. It wraps [`reqwest::Client`], builds
//! request URLs from a per-service base URL, and maps error responses to
//! [`DashboardError`].
//!
//! API endpoint methods are added to `DashboardClient` via `impl` blocks in
//! the [`crate::api`] module.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiErrorBody, DashboardError, Result};
use crate::session::Session;

/// Upstream service a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Quotes, charts, company data, screener, market leaders.
    Stock,
    /// General and company news.
    News,
    /// ML risk signals and stored daily history.
    Ml,
}

/// Core HTTP client for the dashboard backends.
///
/// Cheap to clone: the underlying connection pool is shared.
///
/// # Example
///
/// ```no_run
/// use marketboard::client::DashboardClient;
///
/// # #[tokio::main]
/// # async fn main() -> marketboard::error::Result<()> {
/// let client = DashboardClient::new()?;
/// let quote = client.get_quote("AAPL").await?;
/// println!("AAPL {}", quote.current_price);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    stock_base: Url,
    news_base: Url,
    ml_base: Url,
    /// Signed-in user, if any.
    session: Option<Session>,
    /// Pre-built `Authorization` header for the current session.
    auth_header: Option<HeaderValue>,
}

impl DashboardClient {
    /// Create a client pointing at the default local base URLs.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a client from an explicit configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            stock_base: parse_base(&config.stock_api_url)?,
            news_base: parse_base(&config.news_api_url)?,
            ml_base: parse_base(&config.ml_api_url)?,
            session: None,
            auth_header: None,
        })
    }

    /// Create a client with the given base URLs and default settings.
    ///
    /// Useful for testing against a local mock server.
    pub fn with_base_urls(
        stock_api_url: impl Into<String>,
        news_api_url: impl Into<String>,
        ml_api_url: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(&ClientConfig {
            stock_api_url: stock_api_url.into(),
            news_api_url: news_api_url.into(),
            ml_api_url: ml_api_url.into(),
            ..ClientConfig::default()
        })
    }

    /// Returns a reference to the underlying `reqwest::Client`.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Returns the base URL of a service.
    pub fn base_url(&self, service: Service) -> &Url {
        match service {
            Service::Stock => &self.stock_base,
            Service::News => &self.news_base,
            Service::Ml => &self.ml_base,
        }
    }

    // -----------------------------------------------------------------------
    // Session
    // -----------------------------------------------------------------------

    /// Attach a session; its token is sent as a bearer token on every request.
    pub fn with_session(mut self, session: Session) -> Result<Self> {
        self.set_session(session)?;
        Ok(self)
    }

    /// Replace the current session (e.g. after signing in again).
    pub fn set_session(&mut self, session: Session) -> Result<()> {
        self.auth_header = Some(session.bearer_header()?);
        self.session = Some(session);
        Ok(())
    }

    /// Drop the current session. Subsequent requests are anonymous.
    pub fn clear_session(&mut self) -> Option<Session> {
        self.auth_header = None;
        self.session.take()
    }

    /// Returns the current session, if signed in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    // -----------------------------------------------------------------------
    // Generic HTTP helpers
    // -----------------------------------------------------------------------

    /// Build the URL of `segments` under a service's base URL.
    ///
    /// Each segment is percent-encoded, so a symbol such as `BRK/B` stays a
    /// single path segment.
    pub fn url(&self, service: Service, segments: &[&str]) -> Result<Url> {
        let base = self.base_url(service);
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                DashboardError::InvalidArgument(format!("base URL `{base}` cannot hold a path"))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Perform a GET request and deserialize the JSON response.
    pub async fn get<R: DeserializeOwned>(&self, service: Service, segments: &[&str]) -> Result<R> {
        self.get_with_query(service, segments, &[]).await
    }

    /// Perform a GET request with query parameters and deserialize the JSON response.
    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        service: Service,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<R> {
        let mut url = self.url(service, segments)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url.clone())
            .headers(self.auth_headers())
            .send()
            .await?;

        let result = self.handle_response(resp).await;
        if let Err(err) = &result {
            tracing::warn!(%url, error = %err, "request failed");
        }
        result
    }

    // -----------------------------------------------------------------------
    // Private helpers
    // -----------------------------------------------------------------------

    /// Default headers applied to every request.
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Per-request auth headers. Empty when no session is attached.
    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(1);
        if let Some(value) = &self.auth_header {
            headers.insert(header::AUTHORIZATION, value.clone());
        }
        headers
    }

    /// Read a response, returning either the deserialized body or a `DashboardError`.
    async fn handle_response<R: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if status.is_success() {
            serde_json::from_slice(&bytes).map_err(DashboardError::Json)
        } else {
            let body = String::from_utf8_lossy(&bytes);
            Err(Self::parse_error_body(status, &body))
        }
    }

    /// Try to parse the service's JSON error structure; fall back to a raw
    /// HTTP status error.
    pub(crate) fn parse_error_body(status: reqwest::StatusCode, body: &str) -> DashboardError {
        if let Ok(api_err) = serde_json::from_str::<ApiErrorBody>(body) {
            if api_err.message.is_some() || api_err.error.is_some() {
                return DashboardError::Api(api_err);
            }
        }
        DashboardError::HttpStatus {
            status,
            body: body.to_owned(),
        }
    }
}

/// Parse a base URL, dropping any trailing slash.
fn parse_base(raw: &str) -> Result<Url> {
    Ok(Url::parse(raw.trim_end_matches('/'))?)
}
