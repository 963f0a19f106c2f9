//! Error types for the `marketboard` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, DashboardError>`.
//!
//! [`DashboardError`] covers:
//! - **API errors**: Structured error bodies returned by the upstream services
//! - **HTTP status errors**: Unexpected status codes with response body
//! - **HTTP transport errors**: Network, TLS, timeout failures
//! - **JSON errors**: Deserialization failures
//! - **URL errors**: Malformed base URLs or path segments
//! - **Token errors**: A session token that cannot be decoded
//! - **Invalid arguments**: Client-side validation errors
//!
//! The chart assembler never returns an error; empty inputs simply produce
//! empty output.

use std::fmt;
use std::sync::Arc;

/// Error body returned by the upstream services.
///
/// The services are Spring Boot applications, so the body is either a custom
/// `{ "message": ... }` object or the framework's default error document
/// (`timestamp`, `status`, `error`, `path`).
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable description of the error.
    #[serde(default)]
    pub message: Option<String>,
    /// Short reason phrase (e.g. "Not Found").
    #[serde(default)]
    pub error: Option<String>,
    /// HTTP status echoed by the service.
    #[serde(default)]
    pub status: Option<u16>,
    /// Request path echoed by the service.
    #[serde(default)]
    pub path: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[{status}] ")?,
            None => write!(f, "[???] ")?,
        }
        write!(
            f,
            "{}: {}",
            self.error.as_deref().unwrap_or("Error"),
            self.message.as_deref().unwrap_or("No message"),
        )
    }
}

/// All possible errors produced by the `marketboard` client.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// An error body returned by one of the upstream REST services.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The session token could not be decoded.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure of a fetch shared between several cache callers.
    #[error(transparent)]
    Shared(Arc<DashboardError>),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DashboardError>;
