//! Configuration types for the TMDB API client.
//!
//! This module provides the configuration used to initialize an
//! [`HttpClient`](crate::HttpClient) or [`RestClient`](crate::RestClient).
//!
//! # Overview
//!
//! - [`TmdbConfig`]: The main configuration struct holding all client settings
//! - [`TmdbConfigBuilder`]: A builder for constructing [`TmdbConfig`] instances
//! - [`ApiKey`]: A validated v3 API key with masked debug output
//! - [`AccessToken`]: A validated read access token with masked debug output
//! - [`BaseUrl`]: The validated API root
//! - [`SessionId`] / [`GuestSessionId`]: session identifiers used by
//!   session-scoped resources
//!
//! # Example
//!
//! ```rust
//! use tmdb_api::{TmdbConfig, ApiKey};
//!
//! let config = TmdbConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.themoviedb.org/3");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiKey, BaseUrl, GuestSessionId, SessionId};

use crate::error::ConfigError;
use std::time::Duration;

/// Environment variable holding the v3 API key.
pub const ENV_API_KEY: &str = "TMDB_API_KEY";
/// Environment variable holding the read access token.
pub const ENV_ACCESS_TOKEN: &str = "TMDB_ACCESS_TOKEN";
/// Environment variable overriding the API root.
pub const ENV_BASE_URL: &str = "TMDB_BASE_URL";

/// Configuration for the TMDB API client.
///
/// At least one credential must be configured. When a read access token is
/// present it is sent as an `Authorization: Bearer` header and the API key
/// is not sent; otherwise the API key travels as the `api_key` query
/// parameter.
///
/// # Thread Safety
///
/// `TmdbConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use tmdb_api::{TmdbConfig, AccessToken, BaseUrl};
///
/// let config = TmdbConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080/3").unwrap())
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// assert!(config.api_key().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct TmdbConfig {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbConfig {
    /// Creates a new builder for constructing a `TmdbConfig`.
    #[must_use]
    pub fn builder() -> TmdbConfigBuilder {
        TmdbConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads `TMDB_API_KEY`, `TMDB_ACCESS_TOKEN` and `TMDB_BASE_URL`. Unset
    /// or empty variables are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if neither credential is
    /// set, or [`ConfigError::InvalidBaseUrl`] if `TMDB_BASE_URL` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut builder = Self::builder();
        if let Some(key) = read(ENV_API_KEY) {
            builder = builder.api_key(ApiKey::new(key)?);
        }
        if let Some(token) = read(ENV_ACCESS_TOKEN) {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        if let Some(url) = read(ENV_BASE_URL) {
            builder = builder.base_url(BaseUrl::new(url)?);
        }
        builder.build()
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the read access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the API root.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify TmdbConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TmdbConfig>();
};

/// Builder for constructing [`TmdbConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://api.themoviedb.org/3`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (transport default)
#[derive(Debug, Default)]
pub struct TmdbConfigBuilder {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl TmdbConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the v3 API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the read access token. Takes precedence over the API key.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API root.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TmdbConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if neither `api_key`
    /// nor `access_token` is set.
    pub fn build(self) -> Result<TmdbConfig, ConfigError> {
        if self.api_key.is_none() && self.access_token.is_none() {
            return Err(ConfigError::MissingRequiredField { field: "api_key" });
        }

        Ok(TmdbConfig {
            api_key: self.api_key,
            access_token: self.access_token,
            base_url: self.base_url.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        })
    }
}
