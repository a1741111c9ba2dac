//! Wire types for the authentication endpoint.
//!
//! DESIGN
//! ======
//! The access token is opaque to this crate. `AccessToken` only guarantees it
//! is non-empty and keeps it out of `Debug` output so it never lands in logs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERRORS
// =============================================================================

/// Failures talking to the authentication endpoint.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The request could not be sent or the response body could not be read.
    #[error("login request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("login rejected: status {status}")]
    Status { status: u16, body: String },

    /// A success response body was not the expected JSON shape.
    #[error("login response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// ACCESS TOKEN
// =============================================================================

/// Opaque credential-proof string issued by the authentication endpoint.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token. Returns `None` for an empty string, which the
    /// endpoint contract treats the same as a missing token.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// JSON body for `POST /api/login`. Exactly two keys.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success payload from `POST /api/login`. Unknown fields are ignored.
#[derive(Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// Whether the payload carries a usable token.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Take the token out of the payload, if one is present and non-empty.
    #[must_use]
    pub fn into_token(self) -> Option<AccessToken> {
        self.access_token.and_then(AccessToken::new)
    }
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("has_token", &self.has_token())
            .finish()
    }
}
