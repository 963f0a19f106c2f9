//! Signed-in user session.
//!
//! A [`Session`] is created from the JWT issued by the authentication
//! service and handed explicitly to whatever needs the user's identity,
//! typically [`DashboardClient::with_session`](crate::client::DashboardClient::with_session).
//! Signing out is dropping the session.
//!
//! The token payload is decoded but its signature is not verified; the
//! issuing service and the backends own verification.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderValue;
use serde::Deserialize;

use crate::error::{DashboardError, Result};

/// Identity claims carried by the session token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserClaims {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Subject; the user's email address.
    pub sub: String,
    /// Expiry, epoch seconds.
    #[serde(default)]
    pub exp: Option<i64>,
}

/// An authenticated user: the raw bearer token plus its decoded claims.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    user: UserClaims,
}

impl Session {
    /// Decode a JWT into a session.
    ///
    /// Fails with [`DashboardError::InvalidToken`] when the token does not
    /// have three dot-separated parts or its payload is not base64url JSON
    /// with a `sub` claim.
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let user = decode_claims(&token)?;
        tracing::debug!(sub = %user.sub, "session started");
        Ok(Self { token, user })
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The decoded identity.
    pub fn user(&self) -> &UserClaims {
        &self.user
    }

    /// When the token expires, if it says.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.user.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Whether the token has expired at `now`. Tokens without `exp` never expire.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|at| at <= now)
    }

    /// `Authorization` header value for this session.
    pub fn bearer_header(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|_| {
            DashboardError::InvalidToken("token contains invalid header characters".into())
        })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

fn decode_claims(token: &str) -> Result<UserClaims> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(payload), Some(_), None) if !payload.is_empty() => payload,
        _ => {
            return Err(DashboardError::InvalidToken(
                "expected three dot-separated segments".into(),
            ));
        }
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| DashboardError::InvalidToken(format!("payload is not base64url: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| DashboardError::InvalidToken(format!("payload is not valid claims JSON: {e}")))
}
