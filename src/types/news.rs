#![allow(missing_docs)]
//! News article type shared by the general and company news endpoints.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A news article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsArticle {
    pub id: i64,
    #[serde(default)]
    pub category: Option<String>,
    /// Publication time, epoch seconds.
    pub datetime: i64,
    pub headline: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Comma-separated related symbols.
    #[serde(default)]
    pub related: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub url: String,
}

impl NewsArticle {
    /// Publication time as a UTC timestamp.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.datetime, 0)
    }

    /// Image URL, treating an empty string as no image.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.is_empty())
    }
}
