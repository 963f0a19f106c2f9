//! Client configuration.
//!
//! [`ClientConfig`] holds the base URL of each upstream service and the
//! request timeout. [`ClientConfig::from_env`] reads overrides from the
//! environment; anything unset falls back to the defaults in
//! [`crate::constants`].

use std::env;

use crate::constants::{
    DEFAULT_TIMEOUT_SECS, ENV_ML_API_URL, ENV_NEWS_API_URL, ENV_STOCK_API_URL, ENV_TIMEOUT_SECS,
    ML_API_BASE_URL, NEWS_API_BASE_URL, STOCK_API_BASE_URL,
};
use crate::error::{DashboardError, Result};

/// Base URLs and transport settings for [`DashboardClient`](crate::client::DashboardClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Stock service base URL.
    pub stock_api_url: String,
    /// News service base URL.
    pub news_api_url: String,
    /// ML / relational data service base URL.
    pub ml_api_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            stock_api_url: STOCK_API_BASE_URL.to_owned(),
            news_api_url: NEWS_API_BASE_URL.to_owned(),
            ml_api_url: ML_API_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from `MARKETBOARD_*` environment variables.
    ///
    /// Empty variables are treated as unset. A timeout that is not a positive
    /// integer is rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(DashboardError::InvalidArgument(format!(
                        "{ENV_TIMEOUT_SECS} must be a positive integer, got `{raw}`"
                    )));
                }
            },
            None => defaults.timeout_secs,
        };

        Ok(Self {
            stock_api_url: get(ENV_STOCK_API_URL).unwrap_or(defaults.stock_api_url),
            news_api_url: get(ENV_NEWS_API_URL).unwrap_or(defaults.news_api_url),
            ml_api_url: get(ENV_ML_API_URL).unwrap_or(defaults.ml_api_url),
            timeout_secs,
        })
    }
}
