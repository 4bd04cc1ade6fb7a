//! REST client implementation for the TMDB v3 API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization on top of [`HttpClient`].

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::TmdbConfig;

/// REST API client for the TMDB v3 API.
///
/// Provides `get`, `post` and `delete` with path normalization. All resource
/// types in [`crate::rest::resources`] dispatch through this client.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`; one client can be shared by many resources
/// and tasks.
///
/// # Example
///
/// ```rust,ignore
/// use tmdb_api::{RestClient, TmdbConfig, ApiKey};
///
/// let config = TmdbConfig::builder()
///     .api_key(ApiKey::new("my-key").unwrap())
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("movie/550", None).await?;
/// println!("{}", response.body["title"]);
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the underlying HTTP client cannot be built.
    pub fn new(config: &TmdbConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!(base_url = %http_client.base_url(), "Created TMDB REST client");
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path relative to the API root (e.g., "movie/550")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({"value": 8.5});
    /// let response = client.post("movie/550/rating", body, None).await?;
    /// ```
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request without a body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Sends a DELETE request carrying a JSON body.
    ///
    /// TMDB uses this for `authentication/session`, which takes the session
    /// to invalidate in the body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete_with_body(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, Some(body), query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            if !query_params.is_empty() {
                builder = builder.query(query_params);
            }
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// Leading and trailing `/` characters are stripped; an empty result is
/// rejected.
///
/// ```rust,ignore
/// assert_eq!(normalize_path("/movie/550")?, "movie/550");
/// assert_eq!(normalize_path("account/")?, "account");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/movie/550").unwrap(), "movie/550");
    }

    #[test]
    fn test_normalize_path_strips_trailing_slash() {
        assert_eq!(normalize_path("account/").unwrap(), "account");
    }

    #[test]
    fn test_normalize_path_handles_double_slashes() {
        assert_eq!(normalize_path("//genre/movie/list").unwrap(), "genre/movie/list");
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        let result = normalize_path("");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));
    }

    #[test]
    fn test_normalize_path_only_slash_returns_error() {
        let result = normalize_path("/");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path == "/"));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_new_uses_config_base_url() {
        let config = TmdbConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();
        let client = RestClient::new(&config).unwrap();

        assert_eq!(
            client.http_client().base_url(),
            "https://api.themoviedb.org/3"
        );
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
