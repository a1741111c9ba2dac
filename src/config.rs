//! Login configuration parsed from environment variables.

use crate::util::navigate::{DEFAULT_LANDING_PATH, DEFAULT_LOGIN_PATH, RoutePaths};

pub const BACKEND_API_URL_VAR: &str = "BACKEND_API_URL";
pub const LANDING_PATH_VAR: &str = "LOGIN_LANDING_PATH";
pub const LOGIN_PATH_VAR: &str = "LOGIN_PATH";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing config: env var {var} not set")]
    Missing { var: &'static str },

    /// A variable is set but unusable.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Authentication backend base URL, without a trailing slash.
    pub backend_url: String,
    pub routes: RoutePaths,
}

impl LoginConfig {
    /// Build typed login config from already-resolved values.
    ///
    /// The binary resolves these from flags or environment variables:
    ///
    /// Required:
    /// - `BACKEND_API_URL`: `http://` or `https://` base URL of the backend
    ///
    /// Optional:
    /// - `LOGIN_LANDING_PATH`: default `/mentor`
    /// - `LOGIN_PATH`: default `/mentor/login`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend URL is missing or either path is
    /// malformed.
    pub fn from_parts(
        backend_url: Option<String>,
        landing_path: Option<String>,
        login_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        let backend_url = parse_backend_url(backend_url)?;
        let routes = RoutePaths {
            landing: parse_path(LANDING_PATH_VAR, landing_path, DEFAULT_LANDING_PATH)?,
            login: parse_path(LOGIN_PATH_VAR, login_path, DEFAULT_LOGIN_PATH)?,
        };
        Ok(Self { backend_url, routes })
    }
}

fn parse_backend_url(raw: Option<String>) -> Result<String, ConfigError> {
    let raw = raw
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing { var: BACKEND_API_URL_VAR })?;
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::Invalid {
            var: BACKEND_API_URL_VAR,
            reason: format!("expected http:// or https:// URL, got '{raw}'"),
        });
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_path(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default.to_owned()),
        Some(path) if path.starts_with('/') => Ok(path.to_owned()),
        Some(path) => Err(ConfigError::Invalid { var, reason: format!("path must start with '/', got '{path}'") }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
