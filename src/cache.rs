//! Request-keyed in-memory response cache.
//!
//! Each [`ResponseCache`] maps a [`CacheKey`] (endpoint plus parameter,
//! usually a symbol) to a [`CacheEntry`]:
//!
//! ```text
//!   (missing) ──fetch──▶ Pending ──ok──▶ Fresh ──ttl elapses──▶ Stale
//!                          │                                      │
//!                          └──err──▶ Stale(previous) / removed ◀──┘ (refetch)
//! ```
//!
//! Concurrent callers asking for a key that is already being fetched join
//! the in-flight request instead of issuing their own. Failed fetches are
//! surfaced to every waiting caller; nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use marketboard::cache::{CacheKey, Endpoint, ResponseCache};
//! use marketboard::DashboardClient;
//!
//! # #[tokio::main]
//! # async fn main() -> marketboard::Result<()> {
//! let client = DashboardClient::new()?;
//! let quotes = ResponseCache::new();
//!
//! let key = CacheKey::new(Endpoint::Quote, "AAPL");
//! let c = client.clone();
//! let quote = quotes.get_or_fetch(key, move || async move { c.get_quote("AAPL").await }).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::constants::ttl;
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Upstream endpoint a cached response came from; decides its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Quote,
    StockQuote,
    IntradayChart,
    DailyChart,
    PriceChange,
    CompanyProfile,
    GeneralNews,
    CompanyNews,
    MarketLeaders,
    Screener,
    SectorPerformance,
    UsSymbols,
    MlSignals,
}

impl Endpoint {
    /// How long a response stays fresh.
    pub fn ttl(self) -> Duration {
        let secs = match self {
            Self::Quote | Self::StockQuote => ttl::QUOTE_SECS,
            Self::IntradayChart => ttl::INTRADAY_CHART_SECS,
            Self::DailyChart => ttl::DAILY_CHART_SECS,
            Self::PriceChange => ttl::PRICE_CHANGE_SECS,
            Self::CompanyProfile => ttl::COMPANY_PROFILE_SECS,
            Self::GeneralNews | Self::CompanyNews => ttl::NEWS_SECS,
            Self::MarketLeaders => ttl::MARKET_LEADERS_SECS,
            Self::Screener | Self::SectorPerformance => ttl::SCREENER_SECS,
            Self::UsSymbols => ttl::US_SYMBOLS_SECS,
            Self::MlSignals => ttl::ML_SIGNALS_SECS,
        };
        Duration::from_secs(secs)
    }
}

/// Cache key: an endpoint and its parameter (symbol, list kind, or empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub endpoint: Endpoint,
    pub param: String,
}

impl CacheKey {
    /// Key for a parameterised endpoint.
    pub fn new(endpoint: Endpoint, param: impl Into<String>) -> Self {
        Self {
            endpoint,
            param: param.into(),
        }
    }

    /// Key for an endpoint that takes no parameter.
    pub fn global(endpoint: Endpoint) -> Self {
        Self::new(endpoint, "")
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{}", self.endpoint, self.param)
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

type SharedFetch<V> = Shared<BoxFuture<'static, std::result::Result<V, Arc<DashboardError>>>>;

/// State of one cached key.
pub enum CacheEntry<V> {
    /// A fetch is in flight; `previous` is the last known value, if any.
    Pending {
        fetch: SharedFetch<V>,
        previous: Option<V>,
    },
    /// A value younger than its endpoint's TTL.
    Fresh { value: V, expires_at: Instant },
    /// A value past its TTL, or kept after a failed refresh.
    Stale(V),
}

/// What [`ResponseCache::peek`] found for a key.
#[derive(Debug, Clone, PartialEq)]
pub enum Cached<V> {
    Fresh(V),
    Stale(V),
    Pending(Option<V>),
}

impl<V> Cached<V> {
    /// The best value available, fresh or not.
    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Fresh(v) | Self::Stale(v) => Some(v),
            Self::Pending(previous) => previous,
        }
    }
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// In-memory cache of responses of one value type.
pub struct ResponseCache<V> {
    entries: Mutex<HashMap<CacheKey, CacheEntry<V>>>,
    /// Overrides every endpoint TTL when set.
    ttl_override: Option<Duration>,
}

impl<V> Default for ResponseCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ResponseCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseCache")
            .field("ttl_override", &self.ttl_override)
            .finish_non_exhaustive()
    }
}

impl<V> ResponseCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Empty cache using each endpoint's own TTL.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl_override: None,
        }
    }

    /// Empty cache that keeps every value fresh for `ttl`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl_override: Some(ttl),
        }
    }

    fn ttl_for(&self, key: &CacheKey) -> Duration {
        self.ttl_override.unwrap_or_else(|| key.endpoint.ttl())
    }

    /// Return the cached value for `key`, fetching it if it is missing or expired.
    ///
    /// If a fetch for `key` is already in flight, this call waits for it
    /// instead of calling `fetch`. Errors are returned to every waiter as
    /// [`DashboardError::Shared`]; a value cached before the failed fetch is
    /// kept as [`CacheEntry::Stale`].
    pub async fn get_or_fetch<F, Fut>(&self, key: CacheKey, fetch: F) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V>> + Send + 'static,
    {
        let shared = {
            let mut entries = self.entries.lock().await;
            match entries.get(&key) {
                Some(CacheEntry::Fresh { value, expires_at }) if *expires_at > Instant::now() => {
                    tracing::trace!(%key, "cache hit");
                    return Ok(value.clone());
                }
                Some(CacheEntry::Pending { fetch: in_flight, .. }) => {
                    tracing::trace!(%key, "joining in-flight fetch");
                    in_flight.clone()
                }
                _ => {
                    let previous = match entries.remove(&key) {
                        Some(CacheEntry::Fresh { value, .. } | CacheEntry::Stale(value)) => Some(value),
                        _ => None,
                    };
                    tracing::debug!(%key, stale = previous.is_some(), "cache miss, fetching");
                    let shared = fetch().map(|r| r.map_err(Arc::new)).boxed().shared();
                    entries.insert(
                        key.clone(),
                        CacheEntry::Pending {
                            fetch: shared.clone(),
                            previous,
                        },
                    );
                    shared
                }
            }
        };

        // Unpolled handle, so it can still be compared after `shared` completes.
        let handle = shared.clone();
        let outcome = shared.await;

        let mut entries = self.entries.lock().await;
        let ours = matches!(
            entries.get(&key),
            Some(CacheEntry::Pending { fetch, .. }) if fetch.ptr_eq(&handle)
        );

        match outcome {
            Ok(value) => {
                if ours {
                    let expires_at = Instant::now() + self.ttl_for(&key);
                    entries.insert(
                        key,
                        CacheEntry::Fresh {
                            value: value.clone(),
                            expires_at,
                        },
                    );
                }
                Ok(value)
            }
            Err(err) => {
                if ours {
                    if let Some(CacheEntry::Pending {
                        previous: Some(previous),
                        ..
                    }) = entries.remove(&key)
                    {
                        entries.insert(key.clone(), CacheEntry::Stale(previous));
                    }
                    tracing::warn!(%key, error = %err, "fetch failed");
                }
                Err(DashboardError::Shared(err))
            }
        }
    }

    /// Report what is cached for `key` without fetching.
    ///
    /// Expired fresh values are demoted to stale.
    pub async fn peek(&self, key: &CacheKey) -> Option<Cached<V>> {
        let mut entries = self.entries.lock().await;
        let entry = entries.get_mut(key)?;

        if let CacheEntry::Fresh { value, expires_at } = entry {
            if *expires_at <= Instant::now() {
                let value = value.clone();
                *entry = CacheEntry::Stale(value);
            }
        }

        Some(match entry {
            CacheEntry::Fresh { value, .. } => Cached::Fresh(value.clone()),
            CacheEntry::Stale(value) => Cached::Stale(value.clone()),
            CacheEntry::Pending { previous, .. } => Cached::Pending(previous.clone()),
        })
    }

    /// Store a value as fresh, replacing whatever was cached.
    pub async fn insert(&self, key: CacheKey, value: V) {
        let expires_at = Instant::now() + self.ttl_for(&key);
        self.entries
            .lock()
            .await
            .insert(key, CacheEntry::Fresh { value, expires_at });
    }

    /// Forget `key`. An in-flight fetch still completes for its waiters but
    /// is not stored.
    pub async fn invalidate(&self, key: &CacheKey) -> bool {
        self.entries.lock().await.remove(key).is_some()
    }

    /// Forget everything.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Drop stale values and expired fresh ones. In-flight fetches stay.
    ///
    /// Returns how many keys were removed.
    pub async fn purge_stale(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, entry| match entry {
            CacheEntry::Pending { .. } => true,
            CacheEntry::Fresh { expires_at, .. } => *expires_at > now,
            CacheEntry::Stale(_) => false,
        });
        let removed = before - entries.len();
        if removed > 0 {
            tracing::debug!(removed, kept = entries.len(), "purged stale entries");
        }
        removed
    }

    /// Number of keys held, in any state.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether no keys are held.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}
