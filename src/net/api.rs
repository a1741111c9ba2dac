//! Authentication endpoint client.
//!
//! The login page only depends on the `AuthEndpoint` trait; `HttpAuthEndpoint`
//! is the reqwest implementation that talks to `POST {backend}/api/login`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and malformed success bodies all come
//! back as `LoginError`. The caller decides how much of that to surface; the
//! login page logs it and shows nothing.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginError, LoginRequest, LoginResponse};
use crate::state::login::Credentials;

pub const LOGIN_PATH: &str = "/api/login";

/// Something that can exchange credentials for a login response.
///
/// Futures are not required to be `Send`: the login flow runs on a single
/// cooperative event loop.
#[async_trait(?Send)]
pub trait AuthEndpoint {
    /// Issue exactly one authentication request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the endpoint answers with a
    /// non-success status, or the success body cannot be parsed.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, LoginError>;
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

pub struct HttpAuthEndpoint {
    http: reqwest::Client,
    login_url: String,
}

impl HttpAuthEndpoint {
    /// Build a client for the backend at `base_url`.
    ///
    /// No request timeout is configured; an unresponsive backend leaves the
    /// submit in flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, LoginError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| LoginError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, login_url: login_endpoint(base_url) })
    }

    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait(?Send)]
impl AuthEndpoint for HttpAuthEndpoint {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, LoginError> {
        let body = LoginRequest { email: &credentials.email, password: &credentials.password };
        tracing::debug!(url = %self.login_url, email = %credentials.email, "sending login request");

        let response = self
            .http
            .post(&self.login_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LoginError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(LoginError::Status { status: status.as_u16(), body: text });
        }

        parse_login_response(&text)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

pub(crate) fn login_endpoint(base_url: &str) -> String {
    format!("{}{LOGIN_PATH}", base_url.trim_end_matches('/'))
}

pub(crate) fn parse_login_response(json: &str) -> Result<LoginResponse, LoginError> {
    serde_json::from_str(json).map_err(|e| LoginError::Parse(e.to_string()))
}
